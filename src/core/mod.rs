//! Core domain logic (protocol-agnostic)
//!
//! This module contains the search engine itself, independent of any
//! front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Document status, result items, metadata
//! - **indexer**: Tokenizer, validation and stop words
//! - **storage**: Document store and inverted index
//! - **search**: Query parsing, TF-IDF ranking, matching
//! - **server**: `SearchServer`, the public engine API
//! - **corpus**: JSON Lines corpus loading

pub mod config;
pub mod corpus;
pub mod error;
pub mod indexer;
pub mod search;
pub mod server;
pub mod storage;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiftError};
pub use server::SearchServer;
