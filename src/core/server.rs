//! The search server: document ingestion and the public query API.
//!
//! `SearchServer` owns the stop words, the document store and the inverted
//! index. Ingestion takes `&mut self`; every query takes `&self` and never
//! mutates state.

use crate::core::config::EngineConfig;
use crate::core::error::{Result, SiftError};
use crate::core::indexer::{split_into_words, validate_document_text, StopWords};
use crate::core::search::{match_words, parse_query, DocumentPredicate, Ranker};
use crate::core::storage::{compute_average_rating, DocumentStore, InvertedIndex};
use crate::core::types::{Document, DocumentId, DocumentStatus, INVALID_DOCUMENT_ID};
use std::collections::BTreeMap;

/// Default maximum number of results per query
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Default tolerance under which two relevances are equal
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// In-memory TF-IDF search server
#[derive(Debug)]
pub struct SearchServer {
    stop_words: StopWords,
    documents: DocumentStore,
    index: InvertedIndex,
    max_result_count: usize,
    relevance_epsilon: f64,
}

impl Default for SearchServer {
    fn default() -> Self {
        Self::from_parts(StopWords::default(), &EngineConfig::default())
    }
}

impl SearchServer {
    /// Create a server with the given stop words
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(StopWords::new(stop_words), &EngineConfig::default())
    }

    /// Create a server from space-delimited stop words
    pub fn from_stop_words_text(stop_words_text: &str) -> Self {
        Self::from_parts(
            StopWords::from_text(stop_words_text),
            &EngineConfig::default(),
        )
    }

    /// Create a server from engine configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::from_parts(StopWords::new(&config.stop_words), config)
    }

    fn from_parts(stop_words: StopWords, config: &EngineConfig) -> Self {
        Self {
            stop_words,
            documents: DocumentStore::new(),
            index: InvertedIndex::new(),
            max_result_count: config.max_result_count,
            relevance_epsilon: config.relevance_epsilon,
        }
    }

    /// Merge space-delimited stop words into the current set.
    ///
    /// Only affects documents added and queries run afterwards.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Index a document.
    ///
    /// Rejected, with no change to the server, when the id is negative or
    /// already used, or when the text contains a control character or a
    /// bare `-` word. A document whose words are all stop words is still
    /// stored and counted.
    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            tracing::debug!(id = document_id, "rejected document: negative id");
            return Err(SiftError::InvalidDocumentId(document_id));
        }
        if self.documents.contains(document_id) {
            tracing::debug!(id = document_id, "rejected document: duplicate id");
            return Err(SiftError::DuplicateDocumentId(document_id));
        }
        if let Err(reason) = validate_document_text(document) {
            tracing::debug!(id = document_id, reason, "rejected document: invalid text");
            return Err(SiftError::InvalidDocumentText {
                id: document_id,
                reason: reason.to_string(),
            });
        }

        let words = self
            .stop_words
            .remove_stop_words(split_into_words(document));

        self.documents
            .insert(document_id, compute_average_rating(ratings), status)?;
        self.index.add_document(document_id, &words);

        tracing::debug!(
            id = document_id,
            %status,
            words = words.len(),
            "added document"
        );

        Ok(())
    }

    /// Top documents with status `Actual`
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents with exactly the given status
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_matching(raw_query, &status)
    }

    /// Top documents accepted by a `(id, status, rating)` filter
    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        self.find_top_documents_matching(raw_query, &predicate)
    }

    /// Top documents accepted by any [`DocumentPredicate`]
    pub fn find_top_documents_matching<P>(
        &self,
        raw_query: &str,
        predicate: &P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let query = parse_query(raw_query, &self.stop_words)?;
        Ok(self.ranker().top_documents(&query, predicate))
    }

    pub fn get_document_count(&self) -> usize {
        self.documents.len()
    }

    /// Id at a position in ascending id order, or [`INVALID_DOCUMENT_ID`]
    pub fn get_document_id(&self, index: usize) -> DocumentId {
        self.documents.id_at(index).unwrap_or(INVALID_DOCUMENT_ID)
    }

    /// All document ids in ascending order
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.ids()
    }

    /// Plus words of the query found in the document, plus its status.
    ///
    /// The word list is empty when any minus word occurs in the document.
    /// Fails for an invalid query or an unknown document id.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = parse_query(raw_query, &self.stop_words)?;
        let data = self
            .documents
            .get(document_id)
            .ok_or(SiftError::DocumentNotFound(document_id))?;

        Ok((match_words(&query, &self.index, document_id), data.status))
    }

    /// Term frequencies of one document (empty for unknown ids)
    pub fn word_frequencies(&self, document_id: DocumentId) -> BTreeMap<&str, f64> {
        self.index.word_frequencies(document_id)
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(
            &self.index,
            &self.documents,
            self.max_result_count,
            self.relevance_epsilon,
        )
    }
}
