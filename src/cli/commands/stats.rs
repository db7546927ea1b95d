//! Stats command - summarize a loaded corpus

use crate::cli::commands::load_server;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::types::DocumentId;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON Lines corpus file
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,
}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub documents: usize,
    pub rejected: usize,
    pub stop_words: usize,
    pub load_ms: u64,
    /// Document ids in store order
    pub ids: Vec<DocumentId>,
}

/// Execute the stats command
pub fn execute(
    args: StatsArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (server, stats) = load_server(&args.corpus, config)?;

    let ids = (0..server.get_document_count())
        .map(|index| server.get_document_id(index))
        .collect();

    let response = StatsOutput {
        documents: server.get_document_count(),
        rejected: stats.rejected,
        stop_words: server.stop_words().len(),
        load_ms: stats.duration_ms,
        ids,
    };

    match format {
        OutputFormat::Human => {
            output::print_header(&format!("Corpus: {}", args.corpus.display()));
            println!(
                "  documents:  {}",
                colors::number(&response.documents.to_string())
            );
            println!(
                "  rejected:   {}",
                colors::number(&response.rejected.to_string())
            );
            println!(
                "  stop words: {}",
                colors::number(&response.stop_words.to_string())
            );
            println!(
                "  loaded in:  {}",
                output::format_duration(response.load_ms as f64 / 1000.0)
            );
            println!(
                "  ids:        {}",
                colors::document_id(&output::format_ids(&response.ids))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
