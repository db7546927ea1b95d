//! In-memory storage for indexed documents.
//!
//! # Architecture
//!
//! - **DocumentStore**: per-document rating and status, ordered by id
//! - **InvertedIndex**: term → (document id → term frequency)
//!
//! Both are owned exclusively by a `SearchServer` and are only mutated by
//! `add_document`. Nothing is persisted.

mod documents;
mod inverted_index;

pub use documents::{compute_average_rating, DocumentStore};
pub use inverted_index::{InvertedIndex, Postings};
