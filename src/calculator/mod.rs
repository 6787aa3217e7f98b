//! Four-function arithmetic over integer and floating-point operands.
//!
//! `add`, `subtract` and `multiply` stay in the operand type. `divide` always
//! produces an `f64`, so `divide(7, 2)` is `3.5`, not `3`.

mod error;

pub use error::{CalcError, DIVISION_BY_ZERO_MESSAGE};

/// Numeric types the calculator accepts.
///
/// Integer operands wrap on overflow in every build profile; float operands follow
/// IEEE 754 and overflow to infinity.
pub trait Operand: Copy + PartialEq {
    /// Additive identity, used to detect a zero divisor.
    const ZERO: Self;

    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;

    #[must_use]
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Widens the operand for true division.
    fn to_f64(self) -> f64;
}

macro_rules! impl_operand {
    (int: $($ty:ty),* ; float: $($fty:ty),* $(;)?) => {
        $(
            impl Operand for $ty {
                const ZERO: Self = 0;

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
        $(
            impl Operand for $fty {
                const ZERO: Self = 0.0;

                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_operand! {
    int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize;
    float: f32, f64;
}

/// Returns `a + b`.
///
/// ```
/// assert_eq!(calclog::add(1, 2), 3);
/// assert_eq!(calclog::add(1.5, 2.5), 4.0);
/// assert_eq!(calclog::add(i32::MAX, 1), i32::MIN);
/// ```
#[must_use]
pub fn add<T: Operand>(a: T, b: T) -> T {
    a.wrapping_add(b)
}

/// Returns `a - b`.
///
/// ```
/// assert_eq!(calclog::subtract(5, 3), 2);
/// assert_eq!(calclog::subtract(10.5, 3.5), 7.0);
/// ```
#[must_use]
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a.wrapping_sub(b)
}

/// Returns `a * b`.
///
/// ```
/// assert_eq!(calclog::multiply(3, 4), 12);
/// assert_eq!(calclog::multiply(2.5, 4.0), 10.0);
/// ```
#[must_use]
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a.wrapping_mul(b)
}

/// Returns `a / b` as a float, whatever the operand type.
///
/// ```
/// assert_eq!(calclog::divide(10, 2), Ok(5.0));
/// assert_eq!(calclog::divide(7, 2), Ok(3.5));
/// ```
///
/// # Errors
/// [`CalcError::DivisionByZero`] when `b` is zero (`-0.0` included).
pub fn divide<T: Operand>(a: T, b: T) -> Result<f64, CalcError> {
    if b == T::ZERO {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a.to_f64() / b.to_f64())
}
