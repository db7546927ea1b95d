//! Configuration management for the sift search engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching the engine's built-in
//! constants (5 results, 1e-6 relevance tolerance, no stop words).

use crate::core::error::{Result, SiftError};
use crate::core::indexer::is_valid_word;
use crate::core::types::DocumentStatus;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// File the configuration was read from, `None` for built-in defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Maximum number of documents returned per query
    #[serde(default = "default_max_result_count")]
    pub max_result_count: usize,

    /// Relevances closer than this are considered equal when sorting
    #[serde(default = "default_relevance_epsilon")]
    pub relevance_epsilon: f64,

    /// Words ignored during indexing and querying
    #[serde(default)]
    pub stop_words: Vec<String>,
}

/// Corpus loading configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Status given to corpus entries that omit one
    #[serde(default)]
    pub default_status: DocumentStatus,
}

// Default value functions
fn default_max_result_count() -> usize {
    5
}

fn default_relevance_epsilon() -> f64 {
    1e-6
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_result_count: default_max_result_count(),
            relevance_epsilon: default_relevance_epsilon(),
            stop_words: Vec::new(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            default_status: DocumentStatus::Actual,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| SiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let mut config: Config = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load config, preferring an explicit file path when given.
    ///
    /// Environment variables override values from the file.
    ///
    /// File priority order:
    /// 1. `explicit` (e.g. the CLI `--config` flag)
    /// 2. SIFT_CONFIG env var
    /// 3. User config file (~/.config/sift/config.toml)
    /// 4. ./sift.toml
    /// 5. Defaults
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("SIFT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match user_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ if Path::new("sift.toml").exists() => Self::from_file("sift.toml")?,
                _ => Self::default(),
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_results) = env::var("SIFT_MAX_RESULTS") {
            if let Ok(max) = max_results.parse() {
                self.engine.max_result_count = max;
            }
        }
        if let Ok(epsilon) = env::var("SIFT_RELEVANCE_EPSILON") {
            if let Ok(e) = epsilon.parse() {
                self.engine.relevance_epsilon = e;
            }
        }
        if let Ok(stop_words) = env::var("SIFT_STOP_WORDS") {
            self.engine.stop_words = stop_words
                .split(' ')
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Ok(status) = env::var("SIFT_DEFAULT_STATUS") {
            if let Ok(s) = status.parse() {
                self.corpus.default_status = s;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.engine.max_result_count == 0 {
            return Err(SiftError::ConfigError(
                "Max result count must be non-zero".to_string(),
            ));
        }

        if !self.engine.relevance_epsilon.is_finite() || self.engine.relevance_epsilon < 0.0 {
            return Err(SiftError::ConfigError(
                "Relevance epsilon must be a finite, non-negative number".to_string(),
            ));
        }

        if let Some(word) = self
            .engine
            .stop_words
            .iter()
            .find(|w| !is_valid_word(w) || w.contains(' '))
        {
            return Err(SiftError::ConfigError(format!(
                "Invalid stop word {word:?}: stop words must be single words without control characters"
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        match &self.source {
            Some(path) => tracing::info!("Configuration loaded from {:?}:", path),
            None => tracing::info!("Configuration loaded (built-in defaults):"),
        }
        tracing::info!("  Max result count: {}", self.engine.max_result_count);
        tracing::info!("  Relevance epsilon: {:e}", self.engine.relevance_epsilon);
        tracing::info!("  Stop words: {} words", self.engine.stop_words.len());
        tracing::info!("  Default status: {}", self.corpus.default_status);
    }
}

/// Per-user config file location (`<config dir>/sift/config.toml`)
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sift").join("config.toml"))
}
