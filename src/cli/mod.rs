//! CLI adapter for sift
//!
//! Loads a JSON Lines corpus into a fresh `SearchServer` and runs one
//! query-side operation against it. Nothing is persisted between runs.
//!
//! ```text
//!   corpus.jsonl ──> core::corpus ──> SearchServer ──> cli::output
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// sift - TF-IDF document search
///
/// Index a corpus of short documents and search it with plus words
/// and `-minus` words.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "In-memory TF-IDF document search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (overrides the default locations)
    #[arg(long, global = true, env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the corpus against a query
    Search(commands::SearchArgs),

    /// Show which query words occur in one document
    Match(commands::MatchArgs),

    /// Show document count and ids of a corpus
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sift completions bash > ~/.local/share/bash-completion/completions/sift
    ///   zsh:   sift completions zsh > ~/.zfunc/_sift
    ///   fish:  sift completions fish > ~/.config/fish/completions/sift.fish
    Completions(commands::CompletionsArgs),
}

/// Install the tracing subscriber for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `sift=warn`, or `sift=debug` with
/// `--verbose`. Logs go to stderr so JSON output on stdout stays clean.
pub fn init_logging(verbose: bool, json: bool) {
    let default_filter = if verbose { "sift=debug" } else { "sift=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load_from(cli.config.as_deref())?;
    config.log_config();

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &config, cli.format),
        Commands::Match(args) => commands::matching::execute(args, &config, cli.format),
        Commands::Stats(args) => commands::stats::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
