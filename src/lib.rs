//! # overlap_textrank
//!
//! Sentence ranking with TextRank (Mihalcea & Tarau, 2004).
//!
//! Sentences are linked by shared tokens, the similarity matrix is
//! row-normalized into a transition matrix, and damped power iteration
//! computes a stationary score per sentence. Callers supply tokenized
//! sentences and pick the top-ranked ones for an extractive summary.
//!
//! ```
//! use overlap_textrank::{rank, SentenceSelector, TextRankConfig};
//!
//! let sentences: Vec<Vec<&str>> = [
//!     "hurricane gilbert heads toward dominican coast",
//!     "gilbert swept toward the dominican republic",
//!     "there were no reports of casualties",
//! ]
//! .iter()
//! .map(|s| s.split(' ').collect())
//! .collect();
//!
//! let ranks = rank(&sentences, &TextRankConfig::default()).unwrap();
//! let summary = SentenceSelector::new().with_num_sentences(2).select(&ranks);
//! assert_eq!(summary.len(), 2);
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{RankVector, TeleportMode, TextRankConfig};

// Re-export main functionality
pub use graph::matrix::{SimilarityMatrix, TransitionMatrix};
pub use graph::similarity::{build_similarity, overlap_similarity, SimilarityGraphBuilder};
pub use nlp::stopwords::StopwordFilter;
pub use pagerank::{power::PowerIteration, PageRankResult};
pub use pipeline::observer::{
    FnObserver, IterationObserver, LoggingObserver, NoopObserver, StepLimit, TraceRecorder,
};
pub use pipeline::runner::{rank, RankingPipeline};
pub use summarizer::selector::{SelectedSentence, SentenceSelector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
