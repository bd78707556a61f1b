//! Outcome conversion for filter callbacks.

use crate::error::BoxError;

/// Trait for converting what a filter returns into "replace or keep".
///
/// `Ok(Some(value))` replaces the data threaded to the next filter,
/// `Ok(None)` leaves it unchanged (the filter only observed it).
///
/// # Default Implementations
///
/// - `Option<T>` → `Some` replaces, `None` keeps
/// - `()` → keeps, for observers
/// - `Result<Option<T>, E>` / `Result<(), E>` → as above, or propagates error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid filter outcome for `{T}`",
    label = "filters must return `Option<{T}>`, `()` or a `Result` of either",
    note = "Return `Some(value)` to replace the data or `None` to keep it."
)]
pub trait IntoOutcome<T> {
    /// Convert into the replacement value, if any.
    fn into_outcome(self) -> Result<Option<T>, BoxError>;
}

impl<T> IntoOutcome<T> for Option<T> {
    fn into_outcome(self) -> Result<Option<T>, BoxError> {
        Ok(self)
    }
}

impl<T> IntoOutcome<T> for () {
    fn into_outcome(self) -> Result<Option<T>, BoxError> {
        Ok(None)
    }
}

impl<T, E> IntoOutcome<T> for Result<Option<T>, E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Option<T>, BoxError> {
        self.map_err(Into::into)
    }
}

impl<T, E> IntoOutcome<T> for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Option<T>, BoxError> {
        self.map(|()| None).map_err(Into::into)
    }
}
