//! PageRank-style power iteration over the sentence transition matrix

pub mod power;

/// Raw output of a power-iteration run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the delta reached the threshold
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
