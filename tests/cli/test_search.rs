//! Tests for the search CLI command
//!
//! Covers the engine entry point chosen for each flag combination, output
//! formats and error propagation.

use crate::cli::test_helpers::create_cli_test_config;
use crate::common::{ids, TestCorpus};
use sift::cli::commands::search::{execute, find_documents, SearchArgs};
use sift::cli::commands::load_server;
use sift::cli::OutputFormat;
use sift::DocumentStatus;
use std::path::PathBuf;

fn args(query: &str, corpus: PathBuf) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        corpus,
        status: None,
        any_status: false,
        min_rating: None,
    }
}

/// Test search with valid query returning results
#[test]
fn test_search_valid_query_human() {
    let corpus = TestCorpus::pets();
    let config = create_cli_test_config();

    let result = execute(
        args("пушистый ухоженный кот", corpus.path.clone()),
        &config,
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search in JSON format
#[test]
fn test_search_valid_query_json() {
    let corpus = TestCorpus::pets();
    let config = create_cli_test_config();

    let result = execute(
        args("кот", corpus.path.clone()),
        &config,
        OutputFormat::Json,
    );
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

/// Invalid query surfaces as an error
#[test]
fn test_search_invalid_query() {
    let corpus = TestCorpus::pets();
    let config = create_cli_test_config();

    let result = execute(
        args("--пушистый", corpus.path.clone()),
        &config,
        OutputFormat::Human,
    );
    let err = result.expect_err("Invalid query should fail");
    assert!(err.to_string().contains("Invalid query"));
}

/// Missing corpus file surfaces as an error
#[test]
fn test_search_missing_corpus() {
    let config = create_cli_test_config();
    let result = execute(
        args("кот", PathBuf::from("/nonexistent/corpus.jsonl")),
        &config,
        OutputFormat::Human,
    );
    assert!(result.is_err());
}

#[test]
fn test_find_documents_default_is_actual() {
    let corpus = TestCorpus::pets();
    let (server, _) = load_server(corpus.path(), &create_cli_test_config()).unwrap();

    let result = find_documents(&server, &args("ухоженный", corpus.path.clone())).unwrap();
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_find_documents_by_status() {
    let corpus = TestCorpus::pets();
    let (server, _) = load_server(corpus.path(), &create_cli_test_config()).unwrap();

    let mut search = args("ухоженный", corpus.path.clone());
    search.status = Some(DocumentStatus::Banned);
    assert_eq!(ids(&find_documents(&server, &search).unwrap()), vec![3]);
}

#[test]
fn test_find_documents_any_status() {
    let corpus = TestCorpus::pets();
    let (server, _) = load_server(corpus.path(), &create_cli_test_config()).unwrap();

    let mut search = args("ухоженный", corpus.path.clone());
    search.any_status = true;
    // doc 3 is shorter, so its tf (1/3) beats doc 2 (1/4)
    assert_eq!(ids(&find_documents(&server, &search).unwrap()), vec![3, 2]);
}

#[test]
fn test_find_documents_min_rating() {
    let corpus = TestCorpus::pets();
    let (server, _) = load_server(corpus.path(), &create_cli_test_config()).unwrap();

    let mut search = args("кот ухоженный", corpus.path.clone());
    search.min_rating = Some(2);
    // Actual only, rating >= 2: doc 0 (2) and doc 1 (5); doc 2 (-1) filtered
    let result = find_documents(&server, &search).unwrap();
    assert_eq!(ids(&result), vec![1, 0]);
}
