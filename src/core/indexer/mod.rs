//! Text analysis for ingestion and querying.
//!
//! Turns raw text into the words that get indexed or matched:
//!
//! - Space-only splitting (no stemming, no case folding)
//! - Validation against control characters and bare `-` words
//! - Stop-word removal, applied identically to documents and queries

pub mod stop_words;
pub mod tokenizer;

pub use stop_words::StopWords;
pub use tokenizer::{
    is_valid_word, split_into_words, validate_document_text, EXCLUSION_MARKER,
};
