//! Core data types for the sift search engine.
//!
//! This module defines the document status, the ranked result item
//! returned by queries, and the per-document metadata kept in the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document identifier. Valid ids are non-negative.
pub type DocumentId = i32;

/// Sentinel returned by `get_document_id` for an out-of-range index
pub const INVALID_DOCUMENT_ID: DocumentId = -1;

/// Moderation status attached to every document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    /// All statuses, in declaration order
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Actual,
        DocumentStatus::Irrelevant,
        DocumentStatus::Banned,
        DocumentStatus::Removed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown status '{s}' (expected actual, irrelevant, banned or removed)")
            })
    }
}

/// Ranked search result returned by `find_top_documents`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocumentId,

    /// TF-IDF relevance (higher = more relevant)
    pub relevance: f64,

    /// Average rating of the document
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Self {
            id,
            relevance,
            rating,
        }
    }
}

/// Metadata recorded for every accepted document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}
