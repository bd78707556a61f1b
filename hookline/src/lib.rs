//! # hookline - Named hooks for filter chains and async fan-out
//!
//! Independent modules register callbacks against string-keyed hooks;
//! callers later resolve a hook either into a single value threaded through
//! every callback ([`Registry::apply_filters`]) or into the results of every
//! async callback ([`Registry::run_callbacks`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookline::prelude::*;
//!
//! let registry = Registry::new();
//!
//! registry.add_filter(
//!     Registration::new("title", "upper"),
//!     Filter::transform(|s: &String, _: &Context| Some(s.to_uppercase())),
//! );
//!
//! let title = registry.apply_filters("title", "hello".to_string(), Context::empty())?;
//! assert_eq!(title, "HELLO");
//! ```
//!
//! ## Ordering
//!
//! Entries run in ascending priority (lower first), ties in registration
//! order; entries without a priority weigh [`DEFAULT_PRIORITY`]. Array
//! results are sorted the same way by their elements' [`Payload::priority`].
//! Controllers run before any entry, in registration order.
//!
//! ## Failure
//!
//! Unknown hooks resolve to an empty entry set. Callback errors are not
//! caught: the first one aborts resolution and is returned as a
//! [`HookError`].

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hookline_core::{
    // Errors
    BoxError,
    // Context
    Context,
    // Entries
    Controller,
    DEFAULT_PRIORITY,
    Entry,
    EntryKey,
    EntryMap,
    Filter,
    FilterFn,
    HookError,
    HookId,
    HookTable,
    IntoOutcome,
    Item,
    // Payloads
    Payload,
    Pending,
    Prioritized,
    // Ordering
    Priority,
    context,
    sort_by_priority,
    sort_priority,
    weight,
};

pub use hookline_std::{Registration, Registry, controllers};

#[cfg(feature = "inventory")]
pub use hookline_std::CollectedRegistration;

/// Timeout wrapper for async callbacks.
#[cfg(feature = "timeout")]
pub mod timeout {
    pub use hookline_std::timeout::{TimeoutError, with_timeout};
}

/// Testing utilities.
pub mod testing {
    pub use hookline_std::testing::{CountingController, OrderRecorder};
}

/// Prelude module - common imports for Hookline.
///
/// # Usage
///
/// ```rust,ignore
/// use hookline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Context, Filter, HookError, HookId, Item, Payload, Prioritized, Registration, Registry,
        context,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
