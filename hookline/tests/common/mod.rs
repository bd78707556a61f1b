#![allow(dead_code)]

use hookline::{Context, Filter, Payload, Priority, Registration, Registry};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Payload Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub order: Option<Priority>,
}

impl NavItem {
    pub fn new(label: &str, order: Option<Priority>) -> Self {
        Self {
            label: label.to_string(),
            order,
        }
    }
}

impl Payload for NavItem {
    fn priority(&self) -> Option<Priority> {
        self.order
    }
}

// ============================================================================
// Test Filters
// ============================================================================

/// Registers a `String` filter that appends `tag` and logs its key.
pub fn add_tagging_filter(
    registry: &Registry,
    hook: &str,
    key: &str,
    priority: Option<Priority>,
    log: &Arc<Mutex<Vec<String>>>,
) {
    let mut registration = Registration::new(hook, key);
    if let Some(priority) = priority {
        registration = registration.with_priority(priority);
    }

    let log = log.clone();
    let tag = key.to_string();
    registry.add_filter(
        registration,
        Filter::map(move |mut data: String, _: &Context| {
            log.lock().unwrap().push(tag.clone());
            data.push_str(&tag);
            data
        }),
    );
}

pub fn labels(items: &[NavItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}
