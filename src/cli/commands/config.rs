//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// List every stop word instead of just the count
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration came from, `None` when running on defaults
    pub config_file: Option<String>,
    pub engine: EngineConfig,
    pub default_status: String,
}

#[derive(Debug, Serialize)]
pub struct EngineConfig {
    pub max_result_count: usize,
    pub relevance_epsilon: f64,
    pub stop_words: Vec<String>,
}

impl ConfigResponse {
    pub fn from_config(config: &Config) -> Self {
        Self {
            config_file: config
                .source
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            engine: EngineConfig {
                max_result_count: config.engine.max_result_count,
                relevance_epsilon: config.engine.relevance_epsilon,
                stop_words: config.engine.stop_words.clone(),
            },
            default_status: config.corpus.default_status.to_string(),
        }
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::from_config(config);

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            match &response.config_file {
                Some(path) => println!("  config_file: {path}"),
                None => println!("  config_file: none (built-in defaults)"),
            }
            println!("  engine:");
            println!(
                "    max_result_count: {}",
                response.engine.max_result_count
            );
            println!(
                "    relevance_epsilon: {:e}",
                response.engine.relevance_epsilon
            );
            if args.all {
                println!("    stop_words: {:?}", response.engine.stop_words);
            } else {
                println!("    stop_words: {} words", response.engine.stop_words.len());
            }
            println!("  corpus:");
            println!("    default_status: {}", response.default_status);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
