//! Async fan-out over callbacks registered with `add_callback`.

use crate::registry::Registry;
use futures::future::join_all;
use hookline_core::{Context, HookError, HookId, Pending};

impl Registry {
    /// Run every callback registered on `hook` and await their results.
    ///
    /// The callbacks are collected through [`Registry::apply_filters`], so
    /// they are invoked in priority order and controllers apply. Their
    /// futures are then awaited concurrently; results come back in that
    /// priority order regardless of which future finished first.
    ///
    /// Every future is driven to completion, even after another one has
    /// failed, so all side effects land. The call then fails with the first
    /// rejection in priority order.
    pub async fn run_callbacks<T: Send + 'static>(
        &self,
        hook: impl Into<HookId>,
        ctx: &Context,
    ) -> Result<Vec<T>, HookError> {
        let hook = hook.into();
        let pending = self.apply_filters(hook.clone(), Vec::<Pending<T>>::new(), ctx)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(hook = %hook, callbacks = pending.len(), "awaiting callbacks");

        join_all(pending).await.into_iter().collect()
    }
}
