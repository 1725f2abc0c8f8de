//! Core data types: configuration and the rank vector

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TextRankError};

/// How the damping complement is added at each iteration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeleportMode {
    /// Add `1 - d` to every entry (reference TextRank arithmetic).
    #[default]
    Flat,
    /// Add `(1 - d) / N` to every entry (classical PageRank).
    Classical,
}

impl TeleportMode {
    /// The constant added to every entry of the next rank estimate
    pub fn base(&self, damping: f64, num_nodes: usize) -> f64 {
        match self {
            Self::Flat => 1.0 - damping,
            Self::Classical => (1.0 - damping) / num_nodes as f64,
        }
    }
}

/// Configuration for a ranking run
///
/// # JSON shape
///
/// ```json
/// {
///   "damping": 0.85,
///   "convergence_threshold": 0.0001,
///   "max_iterations": 200,
///   "teleport": "flat",
///   "stopwords_path": "smart_common_words.txt"
/// }
/// ```
///
/// Every field is optional and falls back to [`TextRankConfig::default`].
/// camelCase names (`dampingFactor`, `convergenceThreshold`, `maxIterations`,
/// `stopwordsPath`) are accepted too; any other key is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextRankConfig {
    /// Damping factor, strictly between 0 and 1
    #[serde(alias = "dampingFactor", alias = "damping_factor")]
    pub damping: f64,
    /// Maximum L1 change between successive estimates to count as converged
    #[serde(alias = "convergenceThreshold")]
    pub convergence_threshold: f64,
    /// Upper bound on power-iteration steps
    #[serde(alias = "maxIterations")]
    pub max_iterations: usize,
    /// Teleport term applied at each step
    pub teleport: TeleportMode,
    /// Optional stopword list, one word per line
    #[serde(alias = "stopwordsPath")]
    pub stopwords_path: Option<PathBuf>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 200,
            teleport: TeleportMode::Flat,
            stopwords_path: None,
        }
    }
}

impl TextRankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the teleport mode
    pub fn with_teleport(mut self, teleport: TeleportMode) -> Self {
        self.teleport = teleport;
        self
    }

    /// Set the stopword list path
    pub fn with_stopwords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    /// Check every numeric parameter is in range
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(TextRankError::invalid_config(format!(
                "damping must lie strictly between 0 and 1, got {}",
                self.damping
            )));
        }
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold > 0.0) {
            return Err(TextRankError::invalid_config(format!(
                "convergence_threshold must be a positive finite number, got {}",
                self.convergence_threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Final per-sentence scores, index-aligned with the input sentences.
///
/// After a completed run the scores sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankVector {
    scores: Vec<f64>,
    /// Number of power-iteration steps performed
    pub iterations: usize,
    /// L1 change at the last step
    pub delta: f64,
}

impl RankVector {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Score of the sentence at `index`, or 0.0 if out of range
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Top `n` sentences as `(index, score)`, highest first.
    ///
    /// Ties go to the earlier sentence.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.scores
    }
}
