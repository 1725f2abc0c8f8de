//! Top-K sentence selection for extractive summaries
//!
//! Picks the highest-ranked sentences from a [`RankVector`]. The ranking
//! pipeline never does this itself.

use crate::types::RankVector;

/// A selected sentence with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedSentence {
    /// Position in the input sentence list
    pub index: usize,
    /// TextRank score
    pub score: f64,
}

/// Picks the top-K sentences
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Return the selection in input order instead of score order
    pub document_order: bool,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self {
            num_sentences: 5,
            document_order: false,
        }
    }
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Sort the selection by input position
    pub fn with_document_order(mut self, document_order: bool) -> Self {
        self.document_order = document_order;
        self
    }

    pub fn select(&self, ranks: &RankVector) -> Vec<SelectedSentence> {
        let mut selected: Vec<SelectedSentence> = ranks
            .top_n(self.num_sentences)
            .into_iter()
            .map(|(index, score)| SelectedSentence { index, score })
            .collect();

        if self.document_order {
            selected.sort_by_key(|s| s.index);
        }
        selected
    }

    /// Select and pair each pick with its source sentence
    pub fn select_from<'a, S>(
        &self,
        ranks: &RankVector,
        sentences: &'a [S],
    ) -> Vec<(SelectedSentence, &'a S)> {
        self.select(ranks)
            .into_iter()
            .filter_map(|s| sentences.get(s.index).map(|sentence| (s, sentence)))
            .collect()
    }
}
