//! Summarization helpers
//!
//! Top-K selection over a finished rank vector.

pub mod selector;
