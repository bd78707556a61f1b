//! Pending results collected by async callback hooks.

use crate::{error::HookError, payload::Payload};
use futures::future::BoxFuture;
use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context as TaskContext, Poll},
};

/// A not-yet-awaited result contributed by one async callback.
///
/// Futures are lazy: a `Pending` does nothing until it is polled, which is
/// what lets a synchronous filter chain collect them in priority order and
/// leave the awaiting to the aggregator.
pub struct Pending<T> {
    inner: BoxFuture<'static, Result<T, HookError>>,
}

impl<T> Pending<T> {
    /// Wrap a future.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, HookError>> + Send + 'static,
    {
        Self {
            inner: Box::pin(future),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T, HookError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}

impl<T: 'static> Payload for Pending<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_resolves() {
        let pending = Pending::new(async { Ok::<_, HookError>(5_u8) });
        assert_eq!(futures::executor::block_on(pending).unwrap(), 5);
    }
}
