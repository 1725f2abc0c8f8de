//! Damped power iteration
//!
//! Each step multiplies the current estimate by the transpose of the
//! transition matrix, scales by the damping factor and adds the teleport
//! term:
//!
//! ```text
//! next[i] = base + d * Σ_j T[j][i] * current[j]
//! ```
//!
//! `base` is `1 - d` in [`TeleportMode::Flat`] and `(1 - d) / N` in
//! [`TeleportMode::Classical`]. Iteration stops once the L1 change between
//! steps drops to the threshold, or fails after `max_iterations` steps.
//! The returned vector is normalized to sum to 1.

use rayon::prelude::*;

use super::PageRankResult;
use crate::errors::{Result, TextRankError};
use crate::graph::matrix::TransitionMatrix;
use crate::graph::similarity::PARALLEL_THRESHOLD;
use crate::pipeline::observer::{IterationObserver, NoopObserver};
use crate::types::{RankVector, TeleportMode, TextRankConfig};

/// Power-iteration solver
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
    /// Teleport term
    pub teleport: TeleportMode,
    parallel_threshold: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self::from_config(&TextRankConfig::default())
    }
}

impl PowerIteration {
    /// Create a solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver from the numeric part of a config
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
            teleport: config.teleport,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the teleport mode
    pub fn with_teleport(mut self, teleport: TeleportMode) -> Self {
        self.teleport = teleport;
        self
    }

    /// Set the node count at which steps run on the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Run power iteration.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`. Only cancellation by the observer is an error.
    pub fn run(
        &self,
        matrix: &TransitionMatrix,
        observer: &mut impl IterationObserver,
    ) -> Result<PageRankResult> {
        let n = matrix.size();
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0, true));
        }

        let base = self.teleport.base(self.damping, n);
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            if observer.is_cancelled() {
                return Err(TextRankError::Cancelled { iterations });
            }
            iterations += 1;

            self.step(matrix, &scores, &mut new_scores, base);

            // Convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            observer.on_iteration(iterations, delta);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta <= self.threshold {
                break;
            }
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ok(PageRankResult::new(
            scores,
            iterations,
            delta,
            delta <= self.threshold,
        ))
    }

    /// Run power iteration, treating non-convergence as an error
    pub fn solve(
        &self,
        matrix: &TransitionMatrix,
        observer: &mut impl IterationObserver,
    ) -> Result<RankVector> {
        if matrix.size() == 0 {
            return Err(TextRankError::invalid_input(
                "transition matrix has no nodes",
            ));
        }

        let result = self.run(matrix, observer)?;
        if !result.converged {
            return Err(TextRankError::NonConvergence {
                iterations: result.iterations,
                delta: result.delta,
                scores: result.scores,
            });
        }
        Ok(RankVector::new(result.scores, result.iterations, result.delta))
    }

    /// One step: `next = base + d * Tᵀ · current`.
    ///
    /// Every entry sums over `j` in index order, so the parallel path gives
    /// bit-identical results.
    fn step(&self, matrix: &TransitionMatrix, current: &[f64], next: &mut [f64], base: f64) {
        let n = current.len();
        let damping = self.damping;
        let entry = |i: usize| -> f64 {
            let incoming: f64 = (0..n).map(|j| matrix.get(j, i) * current[j]).sum();
            base + damping * incoming
        };

        if n >= self.parallel_threshold {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(i, value)| *value = entry(i));
        } else {
            for (i, value) in next.iter_mut().enumerate() {
                *value = entry(i);
            }
        }
    }
}

/// Solve a transition matrix with the settings in `config`
pub fn solve(matrix: &TransitionMatrix, config: &TextRankConfig) -> Result<RankVector> {
    config.validate()?;
    PowerIteration::from_config(config).solve(matrix, &mut NoopObserver)
}
