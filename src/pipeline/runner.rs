//! Ranking pipeline: similarity, normalization, then power iteration.
//!
//! A [`RankingPipeline`] holds only validated configuration and the loaded
//! stopword list. Each call to [`RankingPipeline::rank`] builds its own
//! matrices and vectors; nothing carries over between runs.
//!
//! ```
//! # use overlap_textrank::{RankingPipeline, TextRankConfig};
//! let sentences = vec![vec!["a", "b"], vec!["a", "c"]];
//! let pipeline = RankingPipeline::new(TextRankConfig::default()).unwrap();
//! let ranks = pipeline.rank(&sentences).unwrap();
//! assert!((ranks.score(0) - 0.5).abs() < 1e-9);
//! ```

use crate::errors::{Result, TextRankError};
use crate::graph::similarity::SimilarityGraphBuilder;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::power::PowerIteration;
use crate::pipeline::observer::{IterationObserver, NoopObserver};
use crate::types::{RankVector, TextRankConfig};

pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_RANK: &str = "rank";

/// Enter a `tracing` span for a pipeline stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Sentence ranking pipeline
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    config: TextRankConfig,
    stopwords: StopwordFilter,
    graph_builder: SimilarityGraphBuilder,
}

impl RankingPipeline {
    /// Validate `config` and load its stopword list, if any.
    ///
    /// A stopword file that cannot be read only produces a warning.
    pub fn new(config: TextRankConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = match &config.stopwords_path {
            Some(path) => StopwordFilter::from_file(path),
            None => StopwordFilter::empty(),
        };
        Ok(Self {
            config,
            stopwords,
            graph_builder: SimilarityGraphBuilder::new(),
        })
    }

    /// Pipeline with the default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: TextRankConfig::default(),
            stopwords: StopwordFilter::empty(),
            graph_builder: SimilarityGraphBuilder::new(),
        }
    }

    /// Replace the stopword list made available to callers
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Stopwords loaded for caller-side preprocessing.
    ///
    /// Ranking itself never consults this list.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Rank tokenized sentences; scores are aligned with input order.
    pub fn rank<S, T>(&self, sentences: &[S]) -> Result<RankVector>
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        self.rank_with_observer(sentences, &mut NoopObserver)
    }

    /// Rank tokenized sentences, reporting every iteration to `observer`.
    pub fn rank_with_observer<S, T, O>(&self, sentences: &[S], observer: &mut O) -> Result<RankVector>
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
        O: IterationObserver,
    {
        let similarity = {
            trace_stage!(STAGE_SIMILARITY);
            self.graph_builder.build(sentences)?
        };

        let transition = {
            trace_stage!(STAGE_NORMALIZE);
            similarity.normalize_rows()
        };

        trace_stage!(STAGE_RANK);
        let solver = PowerIteration::from_config(&self.config);
        match solver.solve(&transition, observer) {
            Ok(ranks) => {
                tracing::debug!(
                    sentences = ranks.len(),
                    iterations = ranks.iterations,
                    delta = ranks.delta,
                    "ranking converged"
                );
                Ok(ranks)
            }
            Err(err @ TextRankError::NonConvergence { .. }) => {
                tracing::warn!(
                    max_iterations = self.config.max_iterations,
                    threshold = self.config.convergence_threshold,
                    "{err}"
                );
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// One-shot ranking with the given configuration.
///
/// `stopwords_path` is not read here, since ranking never uses the list.
/// Callers that rank repeatedly and want the stopwords should keep a
/// [`RankingPipeline`] instead.
pub fn rank<S, T>(sentences: &[S], config: &TextRankConfig) -> Result<RankVector>
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    config.validate()?;
    RankingPipeline {
        config: config.clone(),
        stopwords: StopwordFilter::empty(),
        graph_builder: SimilarityGraphBuilder::new(),
    }
    .rank(sentences)
}
