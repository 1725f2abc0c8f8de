//! Stopword lists
//!
//! Lists come from a word-per-line file or from the `stop-words` crate.
//! The ranking core never filters with them; they are loaded once and handed
//! to callers that preprocess their own token streams.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of stopwords, matched case-insensitively by default
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase unless case-sensitive)
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl StopwordFilter {
    /// Built-in list for a language code or name.
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru. Unknown languages fall back
    /// to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    /// An empty filter (nothing is a stopword)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    /// Load a word-per-line file.
    ///
    /// An unreadable file is not an error: a warning is logged and an empty
    /// filter is returned.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let filter = Self::parse(&contents);
                tracing::debug!(path = %path.display(), words = filter.len(), "loaded stopwords");
                filter
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "cannot read stopwords file, no stopwords will be used"
                );
                Self::empty()
            }
        }
    }

    /// Parse word-per-line text; blank lines are skipped.
    pub fn parse(contents: &str) -> Self {
        Self {
            stopwords: contents
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Drop stopwords from a tokenized sentence
    pub fn filter_tokens<'a, T: AsRef<str>>(&self, tokens: &'a [T]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
