//! TF-IDF ranking over the inverted index.
//!
//! Relevance of a document is the sum, over the plus words it contains,
//! of `tf × idf` where `idf = ln(total documents / documents with word)`.
//! Documents containing any minus word are dropped regardless of score.

use super::query::Query;
use crate::core::storage::{DocumentStore, InvertedIndex};
use crate::core::types::{Document, DocumentId, DocumentStatus};
use std::collections::BTreeMap;

/// Filter applied to every scored document
pub trait DocumentPredicate {
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

/// A status filters by exact equality
impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == *self
    }
}

/// Read-only ranking view over an index and its document store
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
    documents: &'a DocumentStore,
    max_result_count: usize,
    relevance_epsilon: f64,
}

impl<'a> Ranker<'a> {
    pub fn new(
        index: &'a InvertedIndex,
        documents: &'a DocumentStore,
        max_result_count: usize,
        relevance_epsilon: f64,
    ) -> Self {
        Self {
            index,
            documents,
            max_result_count,
            relevance_epsilon,
        }
    }

    /// Score, sort and truncate the documents matching `query`
    pub fn top_documents<P>(&self, query: &Query, predicate: &P) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut matched = self.find_all_documents(query, predicate);
        let total_matched = matched.len();

        sort_by_relevance(&mut matched, self.relevance_epsilon);
        matched.truncate(self.max_result_count);

        tracing::trace!(
            matched = total_matched,
            returned = matched.len(),
            "ranked documents"
        );

        matched
    }

    /// Every document with a positive match, unsorted (ascending id)
    pub fn find_all_documents<P>(&self, query: &Query, predicate: &P) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let document_count = self.documents.len();
        let mut document_to_relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let Some(idf) = self.index.inverse_document_freq(word, document_count) else {
                continue;
            };

            for (&id, &term_freq) in postings {
                let Some(data) = self.documents.get(id) else {
                    continue;
                };
                if predicate.matches(id, data.status, data.rating) {
                    *document_to_relevance.entry(id).or_insert(0.0) += term_freq * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for id in postings.keys() {
                    document_to_relevance.remove(id);
                }
            }
        }

        document_to_relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.documents
                    .get(id)
                    .map(|data| Document::new(id, relevance, data.rating))
            })
            .collect()
    }
}

/// Sort by relevance descending, then rating descending among equal relevances.
///
/// Relevances within `epsilon` of the highest relevance of their run count
/// as equal. Both passes are stable, so fully tied documents keep their
/// incoming order.
pub fn sort_by_relevance(documents: &mut [Document], epsilon: f64) {
    documents.sort_by(|lhs, rhs| rhs.relevance.total_cmp(&lhs.relevance));

    let mut start = 0;
    while start < documents.len() {
        let anchor = documents[start].relevance;
        let mut end = start + 1;
        while end < documents.len() && (anchor - documents[end].relevance).abs() < epsilon {
            end += 1;
        }

        documents[start..end].sort_by(|lhs, rhs| rhs.rating.cmp(&lhs.rating));
        start = end;
    }
}
