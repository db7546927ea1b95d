//! Document metadata store.
//!
//! Keyed by document id in a `BTreeMap`, so positional lookups walk ids in
//! ascending order and stay deterministic.

use crate::core::error::{Result, SiftError};
use crate::core::types::{DocumentData, DocumentId, DocumentStatus};
use std::collections::BTreeMap;

/// Per-document rating and status, keyed by id
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: BTreeMap<DocumentId, DocumentData>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new document.
    ///
    /// Fails without touching the store if the id is negative or taken.
    pub fn insert(&mut self, id: DocumentId, rating: i32, status: DocumentStatus) -> Result<()> {
        if id < 0 {
            return Err(SiftError::InvalidDocumentId(id));
        }
        if self.documents.contains_key(&id) {
            return Err(SiftError::DuplicateDocumentId(id));
        }

        self.documents.insert(id, DocumentData { rating, status });
        Ok(())
    }

    pub fn get(&self, id: DocumentId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Id at a zero-based position in ascending id order
    pub fn id_at(&self, index: usize) -> Option<DocumentId> {
        self.documents.keys().nth(index).copied()
    }

    /// Iterate over ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }
}

/// Integer mean of the ratings, truncated toward zero; 0 when empty.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }

    // i64 accumulator so large rating lists cannot overflow
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
