//! sift CLI - command-line front end for the sift search engine
//!
//! Loads a JSON Lines corpus into memory and runs a query against it.
//!
//! # Examples
//!
//! ```bash
//! # Rank documents (status "actual" only, by default)
//! sift search "fluffy groomed cat -collar" --corpus docs.jsonl
//!
//! # Any status, rating at least 3
//! sift search "fluffy cat" --corpus docs.jsonl --any-status --min-rating 3
//!
//! # Which query words does document 2 contain?
//! sift match "fluffy cat" --corpus docs.jsonl --id 2
//!
//! # Show configuration
//! sift show-config
//! ```

use clap::Parser;
use sift::cli::output::print_error;
use sift::cli::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
