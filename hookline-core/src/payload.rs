//! Payload trait for data threaded through hooks.

use crate::priority::{Priority, sort_priority};
use std::collections::{BTreeMap, HashMap};

/// Data that can be threaded through a filter chain.
///
/// Payloads must be `Send + 'static` so entries can be stored in a shared
/// registry and pending results can cross await points.
///
/// Two hooks into resolution are provided:
///
/// - [`priority`](Payload::priority) lets a value take part in priority
///   ordering when it is an element of an array-shaped result.
/// - [`settle`](Payload::settle) runs once on the final value of a chain.
///   For `Vec<T>` it orders the elements by their priority, which is what
///   makes results built with `push_to_filter` come out sorted.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct NavItem { label: String, order: i32 }
///
/// impl Payload for NavItem {
///     fn priority(&self) -> Option<Priority> {
///         Some(self.order)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be threaded through a hook",
    label = "missing `Payload` implementation",
    note = "Implement `Payload` for `{Self}`; it must be `Send + 'static`."
)]
pub trait Payload: Send + 'static {
    /// Priority of this value when it is sorted as an array element.
    fn priority(&self) -> Option<Priority> {
        None
    }

    /// Final adjustment applied after every filter ran.
    fn settle(self) -> Self
    where
        Self: Sized,
    {
        self
    }
}

macro_rules! plain_payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

plain_payload!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: Payload> Payload for Vec<T> {
    fn settle(self) -> Self {
        sort_priority(self)
    }
}

impl<T: Payload> Payload for Box<T> {
    fn priority(&self) -> Option<Priority> {
        (**self).priority()
    }
}

impl<T: Payload + Sync> Payload for std::sync::Arc<T> {
    fn priority(&self) -> Option<Priority> {
        (**self).priority()
    }
}

impl<T: Payload> Payload for Option<T> {
    fn priority(&self) -> Option<Priority> {
        self.as_ref().and_then(|value| value.priority())
    }

    fn settle(self) -> Self {
        self.map(|value| value.settle())
    }
}

impl<T: Payload, E: Send + 'static> Payload for Result<T, E> {}

impl<K: Send + 'static, V: Send + 'static, S: Send + 'static> Payload for HashMap<K, V, S> {}

impl<K: Send + 'static, V: Send + 'static> Payload for BTreeMap<K, V> {}

impl<A: Payload, B: Payload> Payload for (A, B) {}

/// A value paired with an explicit priority.
///
/// Use it as the element type of array-shaped hooks whose items have no
/// natural priority of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prioritized<T> {
    /// The wrapped value.
    pub value: T,
    /// Sort weight; `None` weighs [`DEFAULT_PRIORITY`](crate::DEFAULT_PRIORITY).
    pub priority: Option<Priority>,
}

impl<T> Prioritized<T> {
    /// Wrap `value` with an explicit priority.
    pub fn new(value: T, priority: Priority) -> Self {
        Self {
            value,
            priority: Some(priority),
        }
    }

    /// Wrap `value` with the default weight.
    pub fn unweighted(value: T) -> Self {
        Self {
            value,
            priority: None,
        }
    }

    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Send + 'static> Payload for Prioritized<T> {
    fn priority(&self) -> Option<Priority> {
        self.priority
    }
}
