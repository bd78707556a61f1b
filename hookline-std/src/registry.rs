//! Registry holding every hook's entries and controllers.
//!
//! The registry owns three independent tables:
//!
//! - `filters`: active registrations, hook → key → [`Entry`]
//! - `applied`: reserved for introspection; nothing records into it
//! - `controllers`: overrides, hook → key → [`Controller`]
//!
//! Reads hand out clones of `Arc`-backed entries, so locks are never held
//! while user callbacks run. A callback may register on, or resolve, the very
//! hook it was invoked for.

use hookline_core::{Context, Controller, Entry, EntryMap, HookId, HookTable};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// A shared, thread-safe registry of hooks.
///
/// Create one with [`Registry::new`] at process start and share it by
/// reference (or `Arc`), or use [`Registry::global`] for a process-lifetime
/// instance that survives any reinitialization of the host application.
///
/// # Example
/// ```ignore
/// let registry = Registry::new();
/// registry.add_filter(
///     Registration::new("title", "upper"),
///     Filter::transform(|s: &String, _: &Context| Some(s.to_uppercase())),
/// );
///
/// let title = registry.apply_filters("title", "hello".to_string(), Context::empty())?;
/// assert_eq!(title, "HELLO");
/// ```
#[derive(Default)]
pub struct Registry {
    filters: RwLock<HookTable>,
    applied: RwLock<HookTable>,
    controllers: RwLock<HookTable<Controller>>,
}

impl Registry {
    /// Create a registry with three empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first access.
    ///
    /// Every call returns the same instance; it is never torn down.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Entries a hook currently resolves to, after controllers ran.
    ///
    /// Ensures a (possibly empty) filter map exists for `hook`. When
    /// controllers are registered on the hook they run in registration
    /// order, each seeing the previous one's result; a `None` result leaves
    /// the entry set as it was.
    ///
    /// The returned map is a snapshot: later registrations do not show up
    /// in it.
    pub fn get_entries(&self, hook: impl Into<HookId>, ctx: &Context) -> EntryMap {
        let hook = hook.into();
        let mut entries = write(&self.filters).entry(hook.clone()).or_default().clone();

        let controllers: Vec<Controller> = read(&self.controllers)
            .get(&hook)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default();

        for controller in &controllers {
            if let Some(replaced) = controller.apply(&entries, ctx) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    hook = %hook,
                    controller = %controller.key(),
                    before = entries.len(),
                    after = replaced.len(),
                    "controller replaced entries"
                );
                entries = replaced;
            }
        }

        entries
    }

    /// Insert or replace an entry, returning the hook's updated filter map.
    ///
    /// Replacing keeps the entry's original position among the hook's
    /// entries.
    pub fn set_entry(&self, entry: Entry) -> EntryMap {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = %entry.hook(),
            key = %entry.key(),
            priority = ?entry.priority(),
            data_type = entry.data_type(),
            "registering filter"
        );

        let mut filters = write(&self.filters);
        let entries = filters.entry(entry.hook().clone()).or_default();
        entries.insert(entry.key().clone(), entry);
        entries.clone()
    }

    /// Insert or replace a controller.
    pub fn set_controller(&self, controller: Controller) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = %controller.hook(),
            key = %controller.key(),
            "registering controller"
        );

        write(&self.controllers)
            .entry(controller.hook().clone())
            .or_default()
            .insert(controller.key().clone(), controller);
    }

    /// Number of entries `hook` resolves to.
    ///
    /// Controllers run (with an empty context), so this counts what
    /// resolution would see rather than what was registered.
    pub fn count_entries(&self, hook: impl Into<HookId>) -> usize {
        self.get_entries(hook, Context::empty()).len()
    }

    /// Number of controllers registered on `hook`.
    pub fn controller_count(&self, hook: &str) -> usize {
        read(&self.controllers).get(hook).map_or(0, |table| table.len())
    }

    /// Hooks that have a filter map, in the order they were first touched.
    pub fn hooks(&self) -> Vec<HookId> {
        read(&self.filters).keys().cloned().collect()
    }

    /// The applied-filters table.
    ///
    /// Kept for introspection tooling; nothing records into it, so it is
    /// always empty.
    pub fn applied_table(&self) -> HookTable {
        read(&self.applied).clone()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("filters", &*read(&self.filters))
            .field("controllers", &*read(&self.controllers))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::FilterFn;

    fn entry(hook: &str, key: &str, priority: Option<i32>) -> Entry {
        Entry::new(
            hook,
            key,
            FilterFn::transform(|_: &u32, _: &Context| {}),
            priority,
        )
    }

    #[test]
    fn test_unknown_hook_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.count_entries("missing"), 0);
        assert!(registry.get_entries("missing", Context::empty()).is_empty());
    }

    #[test]
    fn test_read_creates_filter_map() {
        let registry = Registry::new();
        assert!(registry.hooks().is_empty());
        registry.count_entries("touched");
        assert_eq!(registry.hooks(), vec![HookId::from("touched")]);
    }

    #[test]
    fn test_set_entry_upserts() {
        let registry = Registry::new();
        registry.set_entry(entry("h", "a", None));
        registry.set_entry(entry("h", "b", None));
        let map = registry.set_entry(entry("h", "a", Some(5)));

        assert_eq!(map.len(), 2);
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map["a"].priority(), Some(5));
    }

    #[test]
    fn test_controllers_in_registration_order() {
        let registry = Registry::new();
        registry.set_entry(entry("h", "a", None));
        registry.set_entry(entry("h", "b", None));

        // Second controller sees the first one's result.
        registry.set_controller(Controller::new(
            "h",
            "drop-a",
            |entries: &EntryMap, _: &Context| {
                let mut next = entries.clone();
                next.shift_remove("a");
                Some(next)
            },
        ));
        registry.set_controller(Controller::new(
            "h",
            "expect-b",
            |entries: &EntryMap, _: &Context| {
                assert_eq!(entries.len(), 1);
                None
            },
        ));

        let resolved = registry.get_entries("h", Context::empty());
        assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(registry.controller_count("h"), 2);
        // Registered filters are untouched.
        assert_eq!(read(&registry.filters)["h"].len(), 2);
    }

    #[test]
    fn test_applied_table_stays_empty() {
        let registry = Registry::new();
        registry.set_entry(entry("h", "a", None));
        registry.count_entries("h");
        assert!(registry.applied_table().is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
    }
}
