//! Timeout wrapper for async callbacks.
//!
//! Resolution itself never times out. Wrap the future an `add_callback`
//! callback returns when a hung contributor must not stall
//! `run_callbacks` forever:
//!
//! ```rust,ignore
//! registry.add_callback(Registration::new("boot", "warm-cache"), |_: &Context| {
//!     with_timeout(Duration::from_secs(2), warm_cache())
//! });
//! ```

use hookline_core::BoxError;
use std::{future::Future, time::Duration};
use tokio::time::timeout;

/// Error returned when a callback future times out.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("callback timed out after {0:?}")]
pub struct TimeoutError(pub Duration);

/// Resolve `future`, or fail with [`TimeoutError`] once `duration` elapsed.
pub async fn with_timeout<F, T, E>(duration: Duration, future: F) -> Result<T, BoxError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    match timeout(duration, future).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(Box::new(TimeoutError(duration))),
    }
}
