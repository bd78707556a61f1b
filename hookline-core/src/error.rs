//! Error types for Hookline.
//!
//! Resolution never fails because a hook is unknown. The only failures are
//! the ones raised by registered callbacks, plus type misuse:
//!
//! - [`HookError::Callback`] - a filter returned an error
//! - [`HookError::TypeMismatch`] - a hook was resolved with a data type its
//!   entry was not registered for
//! - [`HookError::Rejected`] - an async contributor failed during aggregation

use crate::id::{EntryKey, HookId};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by hook resolution.
#[derive(Error, Debug)]
pub enum HookError {
    /// A filter callback failed; the rest of the chain was skipped.
    #[error("filter `{key}` on hook `{hook}` failed")]
    Callback {
        /// Hook being resolved.
        hook: HookId,
        /// Entry whose callback failed.
        key: EntryKey,
        /// Error returned by the callback.
        #[source]
        source: BoxError,
    },

    /// The entry expects a different data type than the one being threaded.
    #[error("filter `{key}` on hook `{hook}` expects `{found}`, hook was resolved with `{expected}`")]
    TypeMismatch {
        /// Hook being resolved.
        hook: HookId,
        /// Entry registered for another type.
        key: EntryKey,
        /// Data type the caller resolved the hook with.
        expected: &'static str,
        /// Data type the entry was registered for.
        found: &'static str,
    },

    /// An async contributor rejected during callback aggregation.
    #[error("callback `{key}` on hook `{hook}` rejected")]
    Rejected {
        /// Hook being aggregated.
        hook: HookId,
        /// Entry whose future failed.
        key: EntryKey,
        /// Error the future resolved to.
        #[source]
        source: BoxError,
    },
}

impl HookError {
    /// The hook that was being resolved.
    pub fn hook(&self) -> &HookId {
        match self {
            HookError::Callback { hook, .. }
            | HookError::TypeMismatch { hook, .. }
            | HookError::Rejected { hook, .. } => hook,
        }
    }

    /// The entry that raised the error.
    pub fn key(&self) -> &EntryKey {
        match self {
            HookError::Callback { key, .. }
            | HookError::TypeMismatch { key, .. }
            | HookError::Rejected { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_callback_error_keeps_source() {
        let err = HookError::Callback {
            hook: "title".into(),
            key: "upper".into(),
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "filter `upper` on hook `title` failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("boom"));
        assert_eq!(err.hook(), "title");
        assert_eq!(err.key(), "upper");
    }
}
