//! Match command - show which query words occur in one document

use crate::cli::commands::load_server;
use crate::cli::output::{colors, format_match};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::types::{DocumentId, DocumentStatus};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Query to match (prefix a word with '-' to exclude)
    pub query: String,

    /// JSON Lines corpus file
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Document id to match against
    #[arg(long)]
    pub id: DocumentId,
}

/// Match response
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub query: String,
    pub id: DocumentId,
    pub status: DocumentStatus,
    pub words: Vec<String>,
}

/// Execute the match command
pub fn execute(
    args: MatchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (server, _stats) = load_server(&args.corpus, config)?;

    let (words, status) = server.match_document(&args.query, args.id)?;

    let output = MatchOutput {
        query: args.query,
        id: args.id,
        status,
        words,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::document_id(&format!("Document {}:", output.id)),
                format_match(&output.words, output.status)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
