//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod matching;
pub mod search;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use matching::MatchArgs;
pub use search::SearchArgs;
pub use stats::StatsArgs;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::corpus::{load_corpus_file, LoadStats};
use crate::core::server::SearchServer;
use std::path::Path;

/// Build a server from configuration and load a corpus file into it
pub fn load_server(
    corpus: &Path,
    config: &Config,
) -> Result<(SearchServer, LoadStats), Box<dyn std::error::Error>> {
    let mut server = SearchServer::with_config(&config.engine);
    let stats = load_corpus_file(&mut server, corpus, config.corpus.default_status)?;

    if stats.rejected > 0 {
        output::print_warning(&format!(
            "{} document(s) in {} were rejected (run with --verbose for details)",
            stats.rejected,
            corpus.display()
        ));
    }

    Ok((server, stats))
}
