//! Structured error types for the corrkit crates.

use thiserror::Error;

/// Unified error type for all corrkit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrkitError {
    /// Paired inputs have different lengths.
    #[error("{op}: length mismatch ({left} vs {right})")]
    LengthMismatch {
        /// Operation that rejected the input.
        op: &'static str,
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Too few observations for the operation.
    #[error("{op}: need at least {needed} observations (got {got})")]
    EmptyInput {
        /// Operation that rejected the input.
        op: &'static str,
        /// Minimum number of observations required.
        needed: usize,
        /// Number of observations supplied.
        got: usize,
    },

    /// Mathematically undefined result (zero variance divisor, parameter
    /// outside its domain).
    #[error("domain error: {0}")]
    Domain(String),
}

impl CorrkitError {
    /// Shorthand for a [`CorrkitError::Domain`] with a formatted message.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}

/// Convenience alias used throughout the corrkit crates.
pub type Result<T> = std::result::Result<T, CorrkitError>;
