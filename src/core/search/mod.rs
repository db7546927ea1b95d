//! Query parsing, TF-IDF ranking and per-document matching.
//!
//! All operations here are read-only over the document store and the
//! inverted index.

mod matcher;
mod query;
mod ranker;

pub use matcher::match_words;
pub use query::{parse_query, Query};
pub use ranker::{sort_by_relevance, DocumentPredicate, Ranker};
