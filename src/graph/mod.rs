//! Sentence similarity graph
//!
//! Builds the pairwise similarity matrix and its row-normalized transition
//! matrix.

pub mod matrix;
pub mod similarity;
