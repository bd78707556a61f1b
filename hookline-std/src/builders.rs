//! Registration helpers.
//!
//! Each helper builds a normalized [`Entry`] (or [`Controller`]) and stores
//! it through [`Registry::set_entry`]. Registering twice under the same hook
//! and key replaces the earlier registration.

use crate::registry::Registry;
use futures::FutureExt;
use hookline_core::{
    BoxError, Context, Controller, Entry, EntryKey, EntryMap, Filter, FilterFn, HookError, HookId,
    Item, Payload, Pending, Priority,
};
use std::{future::Future, sync::OnceLock};

/// Where an entry goes: hook, key and optional priority.
///
/// # Example
/// ```ignore
/// let reg = Registration::new("nav.items", "about").with_priority(20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    hook: HookId,
    key: EntryKey,
    priority: Option<Priority>,
}

impl Registration {
    /// Target `key` on `hook` with the default priority.
    pub fn new(hook: impl Into<HookId>, key: impl Into<EntryKey>) -> Self {
        Self {
            hook: hook.into(),
            key: key.into(),
            priority: None,
        }
    }

    /// Set priority (lower = executed first).
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The target hook.
    pub fn hook(&self) -> &HookId {
        &self.hook
    }

    /// The entry key.
    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    /// The explicit priority, if any.
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    fn into_entry<T: Payload>(self, filter: FilterFn<T>) -> Entry {
        Entry::new(self.hook, self.key, filter, self.priority)
    }
}

impl Registry {
    /// Register a filter on a hook.
    ///
    /// A [`Filter::Constant`] is normalized into a filter that always yields
    /// the value, so static values can be registered without a closure.
    pub fn add_filter<T>(&self, registration: Registration, filter: Filter<T>)
    where
        T: Payload + Clone + Sync,
    {
        self.set_entry(registration.into_entry(filter.into_fn()));
    }

    /// Append an item to an array-shaped hook.
    ///
    /// [`Item::Produce`] runs once, with the context of the first resolution
    /// that reaches this entry; every later resolution appends a clone of
    /// that first value. [`Item::Value`] is cloned.
    pub fn push_to_filter<T>(&self, registration: Registration, item: Item<T>)
    where
        T: Payload + Clone + Sync,
    {
        let resolved = OnceLock::new();
        let filter = FilterFn::map(move |mut items: Vec<T>, ctx: &Context| {
            items.push(resolved.get_or_init(|| item.resolve(ctx)).clone());
            items
        });
        self.set_entry(registration.into_entry(filter));
    }

    /// Register an async callback, collected by [`Registry::run_callbacks`].
    ///
    /// Each resolution of the hook calls `callback` with the context and
    /// appends the returned future to the accumulated `Vec<Pending<T>>`.
    /// The future cannot borrow the context; clone what it needs out of it.
    /// A failing future surfaces as [`HookError::Rejected`].
    pub fn add_callback<T, F, Fut, E>(&self, registration: Registration, callback: F)
    where
        T: Send + 'static,
        F: Fn(&Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let hook = registration.hook.clone();
        let key = registration.key.clone();
        let filter = FilterFn::map(move |mut pending: Vec<Pending<T>>, ctx: &Context| {
            let (hook, key) = (hook.clone(), key.clone());
            pending.push(Pending::new(callback(ctx).map(move |result| {
                result.map_err(|source| HookError::Rejected {
                    hook,
                    key,
                    source: source.into(),
                })
            })));
            pending
        });
        self.set_entry(registration.into_entry(filter));
    }

    /// Register a controller on a hook.
    ///
    /// Controllers run in registration order before any filter and may
    /// replace the entry set by returning `Some`. They carry no priority.
    pub fn add_controller<F>(
        &self,
        hook: impl Into<HookId>,
        key: impl Into<EntryKey>,
        controller: F,
    ) where
        F: Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static,
    {
        self.set_controller(Controller::new(hook, key, controller));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_constant_filter() {
        let registry = Registry::new();
        registry.add_filter(
            Registration::new("site.name", "default"),
            Filter::constant("Hookline"),
        );
        let out = registry
            .apply_filters("site.name", "", Context::empty())
            .unwrap();
        assert_eq!(out, "Hookline");
    }

    #[test]
    fn test_push_value_and_produce() {
        let registry = Registry::new();
        registry.push_to_filter(
            Registration::new("routes", "home").with_priority(10),
            Item::value("/".to_string()),
        );
        registry.push_to_filter(
            Registration::new("routes", "locale").with_priority(20),
            Item::produce(|ctx: &Context| {
                let locale = ctx.find::<&'static str>().copied().unwrap_or("en");
                format!("/{locale}")
            }),
        );

        let ctx = Context::new().with("fr");
        let out = registry.apply_filters("routes", Vec::<String>::new(), &ctx).unwrap();
        assert_eq!(out, vec!["/".to_string(), "/fr".to_string()]);
    }

    #[test]
    fn test_produced_item_is_kept_from_first_resolution() {
        let registry = Registry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        registry.push_to_filter(
            Registration::new("ids", "first-seen"),
            Item::produce(move |ctx: &Context| {
                counter.fetch_add(1, Ordering::SeqCst);
                ctx.find::<u32>().copied()
            }),
        );

        let first = registry
            .apply_filters("ids", Vec::<Option<u32>>::new(), &Context::new().with(1_u32))
            .unwrap();
        let second = registry
            .apply_filters("ids", Vec::<Option<u32>>::new(), &Context::new().with(2_u32))
            .unwrap();

        assert_eq!(first, vec![Some(1)]);
        assert_eq!(second, vec![Some(1)]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_push_against_scalar_is_mismatch() {
        let registry = Registry::new();
        registry.push_to_filter(Registration::new("title", "suffix"), Item::value('!'));
        let err = registry
            .apply_filters("title", String::new(), Context::empty())
            .unwrap_err();
        assert!(matches!(err, HookError::TypeMismatch { .. }));
    }

    #[test]
    fn test_registration_accessors() {
        let reg = Registration::new("h", "k").with_priority(-3);
        assert_eq!(reg.hook(), "h");
        assert_eq!(reg.key(), "k");
        assert_eq!(reg.priority(), Some(-3));
    }
}
