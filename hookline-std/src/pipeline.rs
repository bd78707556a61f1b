//! Filter resolution: threading data through a hook's entries.

use crate::registry::Registry;
use hookline_core::{Context, Entry, HookError, HookId, Payload, sort_by_priority};

impl Registry {
    /// Thread `data` through every entry registered on `hook`.
    ///
    /// Entries are taken from a snapshot (see [`Registry::get_entries`]) and
    /// run in ascending priority, ties in registration order. A filter that
    /// keeps the data (returns `None`) is an observer; one that returns a
    /// value replaces the data for the next filter. The final value is
    /// passed through [`Payload::settle`], which orders array results by
    /// their elements' priority.
    ///
    /// Unknown hooks return `data` unchanged. The first failing filter
    /// aborts the chain and its error is returned.
    pub fn apply_filters<T: Payload>(
        &self,
        hook: impl Into<HookId>,
        data: T,
        ctx: &Context,
    ) -> Result<T, HookError> {
        let hook = hook.into();
        let entries = self.get_entries(hook.clone(), ctx);
        let mut data = data;

        if !entries.is_empty() {
            let mut ordered: Vec<Entry> = entries.into_values().collect();
            sort_by_priority(&mut ordered, Entry::priority);

            #[cfg(feature = "tracing")]
            tracing::trace!(hook = %hook, entries = ordered.len(), "applying filters");

            for entry in &ordered {
                data = entry.apply(data, ctx)?;
            }
        }

        Ok(data.settle())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Registration, Registry};
    use hookline_core::{Context, Filter, HookError, Prioritized};

    #[test]
    fn test_unknown_hook_returns_input() {
        let registry = Registry::new();
        let out = registry
            .apply_filters("nothing", 7_u32, Context::empty())
            .unwrap();
        assert_eq!(out, 7);
    }

    #[test]
    fn test_replace_and_observe() {
        let registry = Registry::new();
        registry.add_filter(
            Registration::new("n", "double").with_priority(1),
            Filter::transform(|n: &u32, _: &Context| Some(n * 2)),
        );
        registry.add_filter(
            Registration::new("n", "observe").with_priority(2),
            Filter::transform(|_: &u32, _: &Context| {}),
        );
        registry.add_filter(
            Registration::new("n", "inc").with_priority(3),
            Filter::map(|n: u32, _: &Context| n + 1),
        );

        let out = registry.apply_filters("n", 5_u32, Context::empty()).unwrap();
        assert_eq!(out, 11);
    }

    #[test]
    fn test_error_aborts_chain() {
        let registry = Registry::new();
        registry.add_filter(
            Registration::new("n", "fail").with_priority(1),
            Filter::transform(|_: &u32, _: &Context| -> Result<Option<u32>, &'static str> {
                Err("refused")
            }),
        );
        registry.add_filter(
            Registration::new("n", "never").with_priority(2),
            Filter::transform(|_: &u32, _: &Context| -> Option<u32> {
                panic!("chain should have stopped")
            }),
        );

        let err = registry
            .apply_filters("n", 1_u32, Context::empty())
            .unwrap_err();
        assert!(matches!(err, HookError::Callback { ref key, .. } if key == "fail"));
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let registry = Registry::new();
        registry.add_filter(Registration::new("n", "num"), Filter::constant(1_u32));

        let err = registry
            .apply_filters("n", String::from("text"), Context::empty())
            .unwrap_err();
        assert!(matches!(err, HookError::TypeMismatch { .. }));
    }

    #[test]
    fn test_array_result_sorted() {
        let registry = Registry::new();
        let out = registry
            .apply_filters(
                "empty",
                vec![Prioritized::new("b", 2), Prioritized::new("a", 1)],
                Context::empty(),
            )
            .unwrap();
        let values: Vec<_> = out.into_iter().map(Prioritized::into_inner).collect();
        assert_eq!(values, vec!["a", "b"]);
    }
}
