//! Ranking pipeline and iteration diagnostics

pub mod observer;
pub mod runner;
