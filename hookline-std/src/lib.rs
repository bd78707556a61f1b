//! # hookline-std
//!
//! Registry implementation for the Hookline filter and callback framework.
//!
//! This crate provides:
//! - **Registry**: [`Registry`] with its entry store and controller table
//! - **Resolution**: [`Registry::apply_filters`] (filter chains) and
//!   [`Registry::run_callbacks`] (async fan-out)
//! - **Registration**: [`Registration`] plus `add_filter`, `push_to_filter`,
//!   `add_callback`, `add_controller`
//! - **Standard controllers**: [`controllers::mask`], [`controllers::retain_only`],
//!   [`controllers::clear`]
//! - **Testing**: [`testing`] helpers

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use hookline_core;

mod aggregate;
mod builders;
#[cfg(feature = "inventory")]
mod collected;
mod pipeline;
mod registry;

pub mod controllers;
pub mod testing;
#[cfg(feature = "timeout")]
pub mod timeout;

pub use builders::Registration;
#[cfg(feature = "inventory")]
pub use collected::CollectedRegistration;
pub use registry::Registry;

#[cfg(feature = "inventory")]
pub use inventory;
