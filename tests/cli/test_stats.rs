//! Tests for the stats and show-config CLI commands

use crate::cli::test_helpers::create_cli_test_config;
use crate::common::TestCorpus;
use sift::cli::commands::config::{execute as execute_config, ConfigArgs, ConfigResponse};
use sift::cli::commands::load_server;
use sift::cli::commands::stats::{execute as execute_stats, StatsArgs};
use sift::cli::OutputFormat;
use sift::Config;

#[test]
fn test_stats_counts_rejected_lines() {
    let corpus = TestCorpus::from_lines(
        r#"{"id": 5, "text": "cat"}
{"id": 5, "text": "dog"}
{"id": 2, "text": "cat - dog"}
{"id": 1, "text": "bird", "ratings": [3]}"#,
    );

    let (server, stats) = load_server(corpus.path(), &create_cli_test_config()).unwrap();
    assert_eq!(stats.added, 2);
    assert_eq!(stats.rejected, 2);
    assert_eq!(server.get_document_id(0), 1);
    assert_eq!(server.get_document_id(1), 5);

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = StatsArgs {
            corpus: corpus.path.clone(),
        };
        assert!(execute_stats(args, &create_cli_test_config(), format).is_ok());
    }
}

#[test]
fn test_stats_malformed_corpus() {
    let corpus = TestCorpus::from_lines("{\"id\": 1, \"text\": \"cat\"}\n{oops}\n");
    let args = StatsArgs {
        corpus: corpus.path.clone(),
    };

    let err = execute_stats(args, &create_cli_test_config(), OutputFormat::Human)
        .expect_err("Malformed corpus should fail");
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_show_config() {
    let config = create_cli_test_config();
    for all in [false, true] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            assert!(execute_config(ConfigArgs { all }, &config, format).is_ok());
        }
    }
}

#[test]
fn test_show_config_reports_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[engine]\nmax_result_count = 3\n").unwrap();

    let config = Config::load_from(Some(&path)).unwrap();
    let response = ConfigResponse::from_config(&config);

    assert_eq!(
        response.config_file.as_deref(),
        Some(path.to_string_lossy().as_ref())
    );
    assert_eq!(response.engine.max_result_count, 3);
}

#[test]
fn test_show_config_without_file() {
    let response = ConfigResponse::from_config(&create_cli_test_config());
    assert!(response.config_file.is_none());
    assert_eq!(response.engine.stop_words, vec!["и", "в", "на"]);
    assert_eq!(response.default_status, "actual");
}
