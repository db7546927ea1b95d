//! Search command - rank a corpus against a query

use crate::cli::commands::load_server;
use crate::cli::output::{colors, format_document};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::Result as SiftResult;
use crate::core::server::SearchServer;
use crate::core::types::{Document, DocumentId, DocumentStatus};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (prefix a word with '-' to exclude documents containing it)
    pub query: String,

    /// JSON Lines corpus file
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Only return documents with this status (default: actual)
    #[arg(long, short = 's', conflicts_with = "any_status")]
    pub status: Option<DocumentStatus>,

    /// Return documents of every status
    #[arg(long)]
    pub any_status: bool,

    /// Only return documents rated at least this high
    #[arg(long, allow_negative_numbers = true)]
    pub min_rating: Option<i32>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Run the query with the narrowest engine entry point the flags allow
pub fn find_documents(server: &SearchServer, args: &SearchArgs) -> SiftResult<Vec<Document>> {
    match (args.status, args.any_status, args.min_rating) {
        (None, false, None) => server.find_top_documents(&args.query),
        (Some(status), _, None) => server.find_top_documents_by_status(&args.query, status),
        (status, any_status, min_rating) => {
            let wanted = if any_status {
                None
            } else {
                Some(status.unwrap_or(DocumentStatus::Actual))
            };
            let min_rating = min_rating.unwrap_or(i32::MIN);

            server.find_top_documents_with(&args.query, move |_id, doc_status, rating| {
                wanted.map_or(true, |s| s == doc_status) && rating >= min_rating
            })
        }
    }
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (server, _stats) = load_server(&args.corpus, config)?;

    let documents = find_documents(&server, &args)?;

    let output = SearchResponseOutput {
        query: args.query.clone(),
        total_results: documents.len(),
        results: documents
            .iter()
            .enumerate()
            .map(|(i, d)| SearchResultItem {
                rank: i + 1,
                id: d.id,
                relevance: d.relevance,
                rating: d.rating,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} result(s) for '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&args.query)
                );

                for (result, document) in output.results.iter().zip(&documents) {
                    println!(
                        "{} {}",
                        colors::rank(&format!("[{}]", result.rank)),
                        format_document(document)
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
