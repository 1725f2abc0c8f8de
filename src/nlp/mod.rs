//! Natural Language Processing components
//!
//! Tokenization is the caller's job; this module only provides stopword lists.

pub mod stopwords;
