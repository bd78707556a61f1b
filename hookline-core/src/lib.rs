//! # hookline-core
//!
//! Core types for the Hookline filter and callback registry.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! modules that only describe what they register, without depending on the
//! registry implementation in `hookline-std`.
//!
//! # Model
//!
//! - A **hook** ([`HookId`]) names an extension point.
//! - An **entry** ([`Entry`]) is one callback registered on a hook under a
//!   unique [`EntryKey`], with an optional [`Priority`].
//! - A **controller** ([`Controller`]) rewrites the entry set a hook resolves
//!   to before any entry runs.
//! - A [`Context`] carries the caller's extra arguments to every callback.
//!
//! Data threaded through a hook implements [`Payload`]. Array-shaped results
//! are ordered by their elements' priority once the chain finishes, using the
//! same ordering as entries: ascending, stable, [`DEFAULT_PRIORITY`] when
//! absent.
//!
//! # Error Types
//!
//! - [`HookError`] - Resolution errors
//! - [`BoxError`] - Errors returned by callbacks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod entry;
mod error;
mod id;
mod outcome;
mod payload;
mod pending;
mod priority;

// Re-exports
pub use context::Context;
pub use entry::{Controller, Entry, EntryMap, Filter, FilterFn, HookTable, Item};
pub use error::{BoxError, HookError};
pub use id::{EntryKey, HookId};
pub use outcome::IntoOutcome;
pub use payload::{Payload, Prioritized};
pub use pending::Pending;
pub use priority::{DEFAULT_PRIORITY, Priority, sort_by_priority, sort_priority, weight};
