//! Error types for the template helper boundary.
//!
//! The predicates themselves are total: they cannot fail for any string
//! input. Errors only exist where a template engine hands us dynamically
//! typed values by helper name, so every variant here describes a call-site
//! mistake in a template, not a runtime condition to recover from.

use thiserror::Error;

/// Errors raised when dispatching a helper call from a template engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelperError {
    #[error("Unknown route helper '{name}'")]
    UnknownHelper { name: String },

    #[error("{helper}() expects {expected} argument(s), got {got}")]
    ArityMismatch {
        helper: String,
        expected: String,
        got: usize,
    },

    #[error("{helper}() argument must be {expected}, got {got}")]
    InvalidArgument {
        helper: String,
        expected: String,
        got: String,
    },
}

impl HelperError {
    pub fn unknown_helper(name: impl Into<String>) -> Self {
        Self::UnknownHelper { name: name.into() }
    }

    pub fn arity_mismatch(helper: impl Into<String>, expected: impl Into<String>, got: usize) -> Self {
        Self::ArityMismatch {
            helper: helper.into(),
            expected: expected.into(),
            got,
        }
    }

    pub fn invalid_argument(
        helper: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            helper: helper.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }
}
