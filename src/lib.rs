//! sift - In-memory TF-IDF document search
//!
//! Ingests short text documents tagged with a status and a rating, builds
//! a word-level inverted index, and answers ranked free-text queries with
//! exclusion terms.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: The engine (protocol-agnostic)
//!   - config, error, types
//!   - indexer (tokenizer, stop words)
//!   - storage (document store, inverted index)
//!   - search (query parser, ranker, matcher)
//!   - server (`SearchServer` API), corpus (JSON Lines loading)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use sift::{DocumentStatus, SearchServer};
//!
//! let mut server = SearchServer::from_stop_words_text("and in on");
//! server
//!     .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//! server
//!     .add_document(2, "groomed dog and fancy collar", DocumentStatus::Actual, &[1, 2])
//!     .unwrap();
//!
//! let top = server.find_top_documents("fluffy groomed -collar").unwrap();
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].id, 1);
//!
//! assert!(server.find_top_documents("--fluffy").is_err());
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SiftError};
pub use core::search::DocumentPredicate;
pub use core::server::SearchServer;
pub use core::types::*;
