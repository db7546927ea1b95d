//! Inverted index for TF-IDF search.
//!
//! Maps each term to the documents containing it, with the term's
//! normalized frequency in each document. Frequencies are stored already
//! divided by the document's token count, so a document's frequencies sum
//! to 1.0.

use crate::core::types::DocumentId;
use std::collections::BTreeMap;

/// Postings for one term: document id → term frequency
pub type Postings = BTreeMap<DocumentId, f64>;

/// Term → postings map
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: BTreeMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a document's words into the index.
    ///
    /// `words` must already be stop-word filtered. Each occurrence adds
    /// `1 / words.len()` to the term's frequency. An empty slice is a no-op.
    pub fn add_document(&mut self, id: DocumentId, words: &[&str]) {
        if words.is_empty() {
            return;
        }

        let inv_word_count = 1.0 / words.len() as f64;
        for &word in words {
            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += inv_word_count;
        }
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(term)
    }

    /// Whether `id` has a posting under `term`
    pub fn contains(&self, term: &str, id: DocumentId) -> bool {
        self.postings(term)
            .is_some_and(|postings| postings.contains_key(&id))
    }

    /// `ln(document_count / document_frequency)`, or `None` for unindexed terms
    pub fn inverse_document_freq(&self, term: &str, document_count: usize) -> Option<f64> {
        let postings = self.postings(term)?;
        Some((document_count as f64 / postings.len() as f64).ln())
    }

    /// All term frequencies recorded for one document
    pub fn word_frequencies(&self, id: DocumentId) -> BTreeMap<&str, f64> {
        self.word_to_document_freqs
            .iter()
            .filter_map(|(word, postings)| postings.get(&id).map(|&tf| (word.as_str(), tf)))
            .collect()
    }
}
