//! Corpus loading.
//!
//! Reads documents in JSON Lines format, one object per line:
//!
//! ```text
//! {"id": 1, "text": "fluffy cat fluffy tail", "status": "actual", "ratings": [7, 2, 7]}
//! {"id": 2, "text": "groomed dog"}
//! ```
//!
//! `status` and `ratings` are optional. Blank lines are skipped. A line
//! that is not valid JSON aborts loading; a document the server rejects
//! (bad id or text) is logged and counted but loading continues.

use crate::core::error::{Result, SiftError};
use crate::core::server::SearchServer;
use crate::core::types::{DocumentId, DocumentStatus};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// One document in a corpus file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Statistics from a corpus load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Documents accepted by the server
    pub added: usize,

    /// Documents rejected by the server
    pub rejected: usize,

    /// Load duration in milliseconds
    pub duration_ms: u64,
}

/// Load a JSON Lines corpus from any buffered reader
pub fn load_corpus<R: BufRead>(
    server: &mut SearchServer,
    reader: R,
    default_status: DocumentStatus,
) -> Result<LoadStats> {
    let start = Instant::now();
    let mut stats = LoadStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: CorpusEntry =
            serde_json::from_str(&line).map_err(|e| SiftError::CorpusError {
                line: line_number,
                message: e.to_string(),
            })?;

        let status = entry.status.unwrap_or(default_status);
        match server.add_document(entry.id, &entry.text, status, &entry.ratings) {
            Ok(()) => stats.added += 1,
            Err(e) if e.is_rejected_document() => {
                tracing::warn!("Skipping document on line {}: {}", line_number, e);
                stats.rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }

    stats.duration_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Corpus loaded: {} documents added, {} rejected in {}ms",
        stats.added,
        stats.rejected,
        stats.duration_ms
    );

    Ok(stats)
}

/// Load a JSON Lines corpus file
pub fn load_corpus_file(
    server: &mut SearchServer,
    path: impl AsRef<Path>,
    default_status: DocumentStatus,
) -> Result<LoadStats> {
    let path = path.as_ref();
    tracing::info!("Loading corpus from {:?}", path);

    let file = File::open(path)?;
    load_corpus(server, BufReader::new(file), default_status)
}
