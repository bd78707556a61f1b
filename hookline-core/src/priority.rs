//! Priority ordering shared by entry resolution and result sorting.
//!
//! Lower priorities run first. Items without a priority weigh
//! [`DEFAULT_PRIORITY`]. Sorting is stable, so equal weights keep their
//! original relative order.

use crate::payload::Payload;

/// Numeric weight determining execution order.
///
/// Weights are integers so ordering is total and `sort_by_key` applies
/// directly. Fractional weights such as `50.5` are not expressible; scale
/// them up (for example by 10) when finer placement is needed.
pub type Priority = i32;

/// Weight given to anything registered without an explicit priority.
pub const DEFAULT_PRIORITY: Priority = 100;

/// Effective weight of an optional priority.
pub const fn weight(priority: Option<Priority>) -> Priority {
    match priority {
        Some(p) => p,
        None => DEFAULT_PRIORITY,
    }
}

/// Stable ascending sort of `items` by the priority `priority_of` reports.
pub fn sort_by_priority<T, F>(items: &mut [T], priority_of: F)
where
    F: Fn(&T) -> Option<Priority>,
{
    items.sort_by_key(|item| weight(priority_of(item)));
}

/// Return `items` ordered by their [`Payload::priority`].
pub fn sort_priority<T: Payload>(mut items: Vec<T>) -> Vec<T> {
    sort_by_priority(&mut items, |item| item.priority());
    items
}
