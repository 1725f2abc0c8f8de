//! Error types
//!
//! Structural and configuration problems fail fast at the pipeline boundary.
//! Numerical edge cases (zero rows, zero denominators) are handled locally and
//! never surface here.

use thiserror::Error;

/// Errors produced while ranking sentences
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextRankError {
    /// Empty sentence list, or a sentence without tokens
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Damping, threshold or iteration bound out of range, or unparseable config
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Power iteration hit `max_iterations` before reaching the threshold.
    ///
    /// `scores` holds the normalized approximate ranks at the point the
    /// solver gave up, so callers can decide whether to accept them.
    #[error("power iteration did not converge after {iterations} iterations (delta {delta:.3e})")]
    NonConvergence {
        iterations: usize,
        delta: f64,
        scores: Vec<f64>,
    },

    /// An observer requested cancellation between iteration steps
    #[error("ranking cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },
}

impl TextRankError {
    /// Shorthand for [`TextRankError::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for [`TextRankError::InvalidConfiguration`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;
