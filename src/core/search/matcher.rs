//! Per-document query matching.

use super::query::Query;
use crate::core::storage::InvertedIndex;
use crate::core::types::DocumentId;

/// Plus words of `query` that occur in document `id`, in query order.
///
/// Empty if any minus word occurs in the document.
pub fn match_words(query: &Query, index: &InvertedIndex, id: DocumentId) -> Vec<String> {
    if query
        .minus_words
        .iter()
        .any(|word| index.contains(word, id))
    {
        return Vec::new();
    }

    query
        .plus_words
        .iter()
        .filter(|word| index.contains(word, id))
        .cloned()
        .collect()
}
