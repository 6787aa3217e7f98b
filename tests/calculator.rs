//! Tests for the arithmetic functions.

use calclog::calculator::DIVISION_BY_ZERO_MESSAGE;
use calclog::{CalcError, add, divide, multiply, subtract};
use proptest::prelude::*;

const SAMPLE: (i32, i32) = (10, 5);

#[test]
fn add_positive_numbers() {
    assert_eq!(add(1, 2), 3);
}

#[test]
fn add_negative_numbers() {
    assert_eq!(add(-1, -2), -3);
}

#[test]
fn add_with_zero() {
    assert_eq!(add(0, 5), 5);
    assert_eq!(add(5, 0), 5);
}

#[test]
fn add_float_numbers() {
    assert!((add(1.5, 2.5) - 4.0_f64).abs() < f64::EPSILON);
}

#[test]
fn integer_overflow_wraps_instead_of_panicking() {
    assert_eq!(add(i32::MAX, 1), i32::MIN);
    assert_eq!(subtract(i64::MIN, 1), i64::MAX);
    assert_eq!(subtract(0_u32, 1), u32::MAX);
    assert_eq!(multiply(u8::MAX, 2), 254);
}

#[test]
fn float_overflow_goes_to_infinity() {
    assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
}

#[test]
fn subtract_positive_numbers() {
    assert_eq!(subtract(5, 3), 2);
}

#[test]
fn subtract_result_negative() {
    assert_eq!(subtract(3, 5), -2);
}

#[test]
fn subtract_sample_pair() {
    let (a, b) = SAMPLE;
    assert_eq!(subtract(a, b), 5);
}

#[test]
fn multiply_positive_numbers() {
    assert_eq!(multiply(3, 4), 12);
}

#[test]
fn multiply_with_zero() {
    assert_eq!(multiply(5, 0), 0);
}

#[test]
fn multiply_negative_numbers() {
    assert_eq!(multiply(-3, 4), -12);
    assert_eq!(multiply(-3, -4), 12);
}

#[test]
fn divide_evenly_returns_float() {
    assert_eq!(divide(10, 2), Ok(5.0));
}

#[test]
fn divide_with_remainder_is_true_division() {
    assert_eq!(divide(7, 2), Ok(3.5));
    assert_eq!(divide(7_u64, 2_u64), Ok(3.5));
}

#[test]
fn divide_floats() {
    assert_eq!(divide(1.0_f32, 4.0_f32), Ok(0.25));
}

#[test]
fn divide_by_zero_fails_with_fixed_message() {
    let err = divide(10, 0).unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(err.to_string(), "0で割ることはできません");
    assert_eq!(err.to_string(), DIVISION_BY_ZERO_MESSAGE);
}

#[test]
fn divide_by_negative_zero_fails() {
    assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
}

proptest! {
    #[test]
    fn add_then_subtract_restores_integer(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }

    #[test]
    fn add_then_subtract_restores_float(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
        prop_assert!((subtract(add(a, b), b) - a).abs() <= 1e-6);
    }

    #[test]
    fn add_then_subtract_restores_any_integer(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }

    #[test]
    fn multiply_commutes(a in -10_000_i64..10_000, b in -10_000_i64..10_000) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn multiply_commutes_for_floats(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn divide_by_zero_always_fails(x in any::<i32>()) {
        prop_assert_eq!(divide(x, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_by_nonzero_matches_float_division(a in -1000_i32..1000, b in 1_i32..1000) {
        let q = divide(a, b).expect("non-zero divisor");
        prop_assert!((q - f64::from(a) / f64::from(b)).abs() < 1e-12);
    }
}
