//! Gives any type a `logger()` accessor named after the type itself.

use super::{Logger, get_logger};
use std::sync::Arc;

/// Dotted logger name for `T`: its full type path with `::` rendered as `.`.
///
/// ```
/// mod jobs {
///     pub struct Worker;
/// }
///
/// let name = calclog::logger_name_of::<jobs::Worker>();
/// assert!(name.ends_with("jobs.Worker"));
/// ```
#[must_use]
pub fn logger_name_of<T: ?Sized>() -> String {
    std::any::type_name::<T>().replace("::", ".")
}

/// Implement with an empty block to get a per-type logger on the root dispatcher.
///
/// ```
/// use calclog::HasLogger;
///
/// struct Importer;
/// impl HasLogger for Importer {}
///
/// let importer = Importer;
/// assert!(importer.logger().name().ends_with(".Importer"));
/// ```
///
/// The name is recomputed from the type on every call; the registry still hands
/// back the same handle each time.
pub trait HasLogger {
    fn logger(&self) -> Arc<Logger> {
        get_logger(&logger_name_of::<Self>())
    }
}
