//! Standard controllers.
//!
//! Ready-made overrides for [`Registry::add_controller`](crate::Registry::add_controller),
//! typically installed by a build variant to switch features off without
//! touching the modules that registered them.
//!
//! ```rust,ignore
//! // Drop the analytics filter from the page head in this build.
//! registry.add_controller("page.head", "no-analytics", controllers::mask(["analytics"]));
//! ```

use hookline_core::{Context, EntryKey, EntryMap};
use std::collections::HashSet;

/// Remove the listed keys from the entry set.
pub fn mask<I, K>(keys: I) -> impl Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static
where
    I: IntoIterator<Item = K>,
    K: Into<EntryKey>,
{
    let keys: HashSet<EntryKey> = keys.into_iter().map(Into::into).collect();
    move |entries, _| {
        if !entries.keys().any(|key| keys.contains(key)) {
            return None;
        }
        Some(
            entries
                .iter()
                .filter(|(key, _)| !keys.contains(*key))
                .map(|(key, entry)| (key.clone(), entry.clone()))
                .collect(),
        )
    }
}

/// Keep only the listed keys.
pub fn retain_only<I, K>(
    keys: I,
) -> impl Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static
where
    I: IntoIterator<Item = K>,
    K: Into<EntryKey>,
{
    let keys: HashSet<EntryKey> = keys.into_iter().map(Into::into).collect();
    move |entries, _| {
        Some(
            entries
                .iter()
                .filter(|(key, _)| keys.contains(*key))
                .map(|(key, entry)| (key.clone(), entry.clone()))
                .collect(),
        )
    }
}

/// Suppress every entry on the hook.
pub fn clear() -> impl Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static {
    |_, _| Some(EntryMap::default())
}
