// Copyright 2025 Cowboy AI, LLC.

//! Error types for boolean sources
//!
//! The combinators in this crate never fail on their own: whatever error an
//! operand produces is handed to the consumer untouched. [`SourceError`] is a
//! ready-made error type for sources that wrap fallible checks, so callers do
//! not have to invent one for the common cases.

use thiserror::Error;

/// Errors produced by boolean sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A check ran but could not reach a verdict
    #[error("Check failed: {check} - {reason}")]
    CheckFailed {
        /// Name of the check
        check: String,
        /// Why it failed
        reason: String,
    },

    /// The backing service could not be reached
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// Generic source error
    #[error("Source error: {0}")]
    Generic(String),
}

impl SourceError {
    /// Create a generic source error
    pub fn generic(msg: impl Into<String>) -> Self {
        SourceError::Generic(msg.into())
    }

    /// Create a check failure
    pub fn check_failed(check: impl Into<String>, reason: impl Into<String>) -> Self {
        SourceError::CheckFailed {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is transient and the source may succeed when
    /// observed again
    pub fn is_transient(&self) -> bool {
        matches!(self, SourceError::Unavailable(_))
    }
}
