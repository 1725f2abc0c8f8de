//! Sentence similarity graph construction
//!
//! Two sentences are linked by the number of distinct tokens they share,
//! normalized by the log of their lengths (Mihalcea & Tarau 2004, §4.1):
//!
//! ```text
//! sim(i, j) = |set(S_i) ∩ set(S_j)| / (ln |S_i| + ln |S_j|)
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::matrix::SimilarityMatrix;
use crate::errors::{Result, TextRankError};

/// Node count at which rows are computed on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 64;

/// A sentence prepared for pairwise comparison
#[derive(Debug, Clone)]
struct SentenceProfile<'a> {
    /// Distinct tokens
    tokens: FxHashSet<&'a str>,
    /// ln of the raw token count (duplicates included)
    log_len: f64,
}

impl<'a> SentenceProfile<'a> {
    fn new<T: AsRef<str>>(tokens: &'a [T]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.as_ref()).collect(),
            log_len: (tokens.len() as f64).ln(),
        }
    }

    fn overlap(&self, other: &SentenceProfile<'_>) -> usize {
        let (small, large) = if self.tokens.len() <= other.tokens.len() {
            (&self.tokens, &other.tokens)
        } else {
            (&other.tokens, &self.tokens)
        };
        small.iter().filter(|t| large.contains(*t)).count()
    }

    fn similarity(&self, other: &SentenceProfile<'_>) -> f64 {
        let overlap = self.overlap(other);
        if overlap == 0 {
            return 0.0;
        }
        // Two single-token sentences: ln 1 + ln 1 = 0.
        let denom = self.log_len + other.log_len;
        if denom <= 0.0 {
            return 0.0;
        }
        overlap as f64 / denom
    }
}

/// Token-overlap similarity between two tokenized sentences.
///
/// Returns 0.0 when they share nothing, and when both have a single token
/// (the log-length denominator would be zero).
pub fn overlap_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    SentenceProfile::new(a).similarity(&SentenceProfile::new(b))
}

/// Check the precondition shared by every ranking entry point:
/// at least one sentence, and no sentence without tokens.
pub fn validate_sentences<S, T>(sentences: &[S]) -> Result<()>
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    if sentences.is_empty() {
        return Err(TextRankError::invalid_input("no sentences to rank"));
    }
    if let Some(index) = sentences.iter().position(|s| s.as_ref().is_empty()) {
        return Err(TextRankError::invalid_input(format!(
            "sentence {index} has no tokens"
        )));
    }
    Ok(())
}

/// Builds the pairwise similarity matrix for a sentence list
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    parallel_threshold: usize,
}

impl Default for SimilarityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityGraphBuilder {
    pub fn new() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Set the node count at which rows are built in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the similarity matrix.
    ///
    /// Fails with [`TextRankError::InvalidInput`] if `sentences` is empty or
    /// any sentence has no tokens.
    pub fn build<S, T>(&self, sentences: &[S]) -> Result<SimilarityMatrix>
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        validate_sentences(sentences)?;

        let profiles: Vec<SentenceProfile<'_>> = sentences
            .iter()
            .map(|s| SentenceProfile::new(s.as_ref()))
            .collect();

        let row = |i: usize| -> Vec<f64> {
            profiles
                .iter()
                .enumerate()
                .map(|(j, other)| {
                    if i == j {
                        0.0
                    } else {
                        profiles[i].similarity(other)
                    }
                })
                .collect()
        };

        let n = profiles.len();
        let rows: Vec<Vec<f64>> = if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(row).collect()
        } else {
            (0..n).map(row).collect()
        };

        Ok(SimilarityMatrix::from_rows(rows))
    }
}

/// Build the similarity matrix with default settings
pub fn build_similarity<S, T>(sentences: &[S]) -> Result<SimilarityMatrix>
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    SimilarityGraphBuilder::new().build(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sents(raw: &[&str]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.split(' ').map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_shared_token_similarity() {
        let sim = build_similarity(&sents(&["a b", "a c"])).unwrap();

        let expected = 1.0 / (2.0_f64.ln() * 2.0);
        assert!((sim.get(0, 1) - expected).abs() < 1e-12);
        assert!((sim.get(0, 1) - 0.7213).abs() < 1e-4);
        assert_eq!(sim.get(0, 1), sim.get(1, 0));
    }

    #[test]
    fn test_shared_token_pair_transition() {
        let transition = build_similarity(&sents(&["a b", "a c"]))
            .unwrap()
            .normalize_rows();

        assert_eq!(transition.row(0), &[0.0, 1.0]);
        assert_eq!(transition.row(1), &[1.0, 0.0]);
    }

    #[test]
    fn test_disjoint_sentences_transition_is_zero() {
        let transition = build_similarity(&sents(&["a b", "c d", "e f"]))
            .unwrap()
            .normalize_rows();

        assert_eq!(transition.size(), 3);
        for i in 0..3 {
            assert_eq!(transition.row(i), &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_single_token_pair_transition_is_zero() {
        let transition = build_similarity(&sents(&["storm", "storm"]))
            .unwrap()
            .normalize_rows();

        assert_eq!(transition.row(0), &[0.0, 0.0]);
        assert_eq!(transition.row(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_diagonal_is_zero() {
        let sim = build_similarity(&sents(&["a b c", "a b", "c d e"])).unwrap();
        for i in 0..sim.size() {
            assert_eq!(sim.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_duplicates_collapse_in_overlap_but_count_in_length() {
        // overlap {a} = 1, lengths 3 and 2
        let sim = overlap_similarity(&["a", "a", "b"], &["a", "c"]);
        let expected = 1.0 / (3.0_f64.ln() + 2.0_f64.ln());
        assert!((sim - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_token_pair_is_zero() {
        let sim = build_similarity(&sents(&["storm", "storm"])).unwrap();
        assert_eq!(sim.get(0, 1), 0.0);
        assert_eq!(sim.get(1, 0), 0.0);
    }

    #[test]
    fn test_single_token_against_longer_sentence() {
        // ln 1 + ln 2 > 0, so the pair is still defined
        let sim = overlap_similarity(&["storm"], &["storm", "surge"]);
        assert!((sim - 1.0 / 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_no_overlap() {
        let sim = build_similarity(&sents(&["a b", "c d", "e f"])).unwrap();
        for i in 0..3 {
            assert_eq!(sim.row_sum(i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let sim = build_similarity(&sents(&[
            "the storm moved west",
            "storm winds hit the coast",
            "the coast guard",
            "winds",
        ]))
        .unwrap();
        assert!(sim.is_symmetric());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus: Vec<Vec<String>> = (0..80)
            .map(|i| {
                vec![
                    format!("w{}", i % 7),
                    format!("w{}", i % 11),
                    format!("w{}", i % 3),
                ]
            })
            .collect();

        let seq = SimilarityGraphBuilder::new()
            .with_parallel_threshold(usize::MAX)
            .build(&corpus)
            .unwrap();
        let par = SimilarityGraphBuilder::new()
            .with_parallel_threshold(1)
            .build(&corpus)
            .unwrap();

        assert_eq!(seq, par);
    }

    #[test]
    fn test_empty_input_rejected() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            build_similarity(&empty),
            Err(TextRankError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_sentence_rejected() {
        let input = vec![vec!["a".to_string()], Vec::new()];
        let err = build_similarity(&input).unwrap_err();
        assert_eq!(
            err,
            TextRankError::InvalidInput("sentence 1 has no tokens".to_string())
        );
    }

    #[test]
    fn test_accepts_borrowed_tokens() {
        let input: Vec<Vec<&str>> = vec![vec!["a", "b"], vec!["b", "c"]];
        let sim = build_similarity(&input).unwrap();
        assert!(sim.get(0, 1) > 0.0);
    }
}
