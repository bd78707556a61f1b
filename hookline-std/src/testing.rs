//! Testing utilities for Hookline.
//!
//! - [`OrderRecorder`]: filters that record the order in which they ran
//! - [`CountingController`]: a pass-through controller that counts its calls

use hookline_core::{Context, EntryMap, Filter, Payload};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Order Recorder
// ============================================================================

/// Hands out observer filters that log their label when they run.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = OrderRecorder::new();
/// registry.add_filter(Registration::new("h", "a").with_priority(90), recorder.observer::<u8>("a"));
/// registry.add_filter(Registration::new("h", "b").with_priority(10), recorder.observer::<u8>("b"));
///
/// registry.apply_filters("h", 0_u8, Context::empty())?;
/// assert_eq!(recorder.order(), vec!["b", "a"]);
/// ```
#[derive(Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<String>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that records `label` and leaves the data unchanged.
    pub fn observer<T: Payload>(&self, label: impl Into<String>) -> Filter<T> {
        let order = self.order.clone();
        let label = label.into();
        Filter::transform(move |_: &T, _: &Context| {
            order.lock().unwrap().push(label.clone());
        })
    }

    /// Labels in the order they were recorded.
    pub fn order(&self) -> Vec<String> {
        self.order.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.order.lock().unwrap().len()
    }

    /// Clear all recorded labels.
    pub fn clear(&self) {
        self.order.lock().unwrap().clear();
    }
}

// ============================================================================
// Counting Controller
// ============================================================================

/// A controller that counts invocations and never changes the entry set.
///
/// Useful for checking when controllers run, e.g. that `count_entries`
/// applies them too.
#[derive(Clone, Default)]
pub struct CountingController {
    count: Arc<AtomicUsize>,
}

impl CountingController {
    /// Create a new counting controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// The controller function to register.
    pub fn controller(
        &self,
    ) -> impl Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static {
        let count = self.count.clone();
        move |_, _| {
            count.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
