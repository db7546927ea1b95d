// Integration tests for ranked search

use crate::common::{assert_sorted_by_relevance, create_pet_server, ids};
use sift::core::config::EngineConfig;
use sift::{DocumentId, DocumentStatus, SearchServer, SiftError};

const EPSILON: f64 = 1e-6;

#[test]
fn test_search_scenario_two_documents() {
    let mut server = SearchServer::from_stop_words_text("и в на");
    server
        .add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7])
        .unwrap();
    server
        .add_document(3, "пушистый пёс и модный ошейник", DocumentStatus::Actual, &[1, 2])
        .unwrap();

    let result = server.find_top_documents("пушистый пёс").unwrap();

    assert_eq!(ids(&result), vec![3, 1]);
    // "пушистый" is in both documents (idf 0); "пёс" only in doc 3
    assert!((result[0].relevance - 2f64.ln() * 0.25).abs() < EPSILON);
    assert_eq!(result[0].rating, 1);
    assert!(result[1].relevance.abs() < EPSILON);
    assert_eq!(result[1].rating, 5);
}

#[test]
fn test_search_default_actual_status() {
    let server = create_pet_server();
    let result = server.find_top_documents("пушистый ухоженный кот").unwrap();

    assert_eq!(ids(&result), vec![1, 0, 2]);
    assert!((result[0].relevance - 0.866434).abs() < EPSILON);
    assert!((result[1].relevance - 0.173287).abs() < EPSILON);
    assert!((result[2].relevance - 0.173287).abs() < EPSILON);
    assert_eq!(
        result.iter().map(|d| d.rating).collect::<Vec<_>>(),
        vec![5, 2, -1]
    );
    assert_sorted_by_relevance(&result);
}

#[test]
fn test_search_by_status() {
    let server = create_pet_server();
    let result = server
        .find_top_documents_by_status("пушистый ухоженный кот", DocumentStatus::Banned)
        .unwrap();

    assert_eq!(ids(&result), vec![3]);
    assert!((result[0].relevance - 0.231049).abs() < EPSILON);
    assert_eq!(result[0].rating, 9);
}

#[test]
fn test_search_with_predicate() {
    let server = create_pet_server();
    let result = server
        .find_top_documents_with("пушистый ухоженный кот", |id, _status, _rating| id % 2 == 0)
        .unwrap();

    assert_eq!(ids(&result), vec![0, 2]);
}

#[test]
fn test_search_with_status_value_as_predicate() {
    let server = create_pet_server();
    let via_status = server
        .find_top_documents_matching("ухоженный", &DocumentStatus::Banned)
        .unwrap();
    let via_closure = server
        .find_top_documents_with("ухоженный", |_, status, _| status == DocumentStatus::Banned)
        .unwrap();

    assert_eq!(via_status, via_closure);
}

#[test]
fn test_minus_word_excludes_document() {
    let server = create_pet_server();
    let result = server.find_top_documents("кот -хвост").unwrap();

    assert_eq!(ids(&result), vec![0]);
}

#[test]
fn test_minus_word_excludes_regardless_of_filter() {
    let server = create_pet_server();
    let result = server
        .find_top_documents_with("ухоженный -скворец", |_, _, _| true)
        .unwrap();

    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_minus_only_query_returns_empty() {
    let server = create_pet_server();
    let result = server.find_top_documents("-кот").unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_unknown_words_return_empty_list() {
    let server = create_pet_server();
    let result = server.find_top_documents("жираф -носорог").unwrap();
    assert!(result.is_empty(), "Valid query with no matches is Ok(empty)");
}

#[test]
fn test_stop_words_in_query_ignored() {
    let server = create_pet_server();
    let with_stop = server.find_top_documents("и кот в").unwrap();
    let without = server.find_top_documents("кот").unwrap();
    assert_eq!(with_stop, without);
}

#[test]
fn test_invalid_queries_rejected() {
    let server = create_pet_server();

    for query in ["--пушистый", "-", "кот -", "кот --хвост", "кот\x12", "\tкот"] {
        let result = server.find_top_documents(query);
        assert!(
            matches!(result, Err(SiftError::InvalidQuery(_))),
            "Expected InvalidQuery for {query:?}"
        );
    }
}

#[test]
fn test_invalid_query_rejected_on_empty_server() {
    let server = SearchServer::default();
    assert!(server.find_top_documents("--пушистый").is_err());
    assert!(server.find_top_documents("пушистый").unwrap().is_empty());
}

#[test]
fn test_results_truncated_to_five() {
    let mut server = SearchServer::default();
    for id in 0..10 {
        server
            .add_document(id, "cat", DocumentStatus::Actual, &[id])
            .unwrap();
    }
    server
        .add_document(10, "dog", DocumentStatus::Actual, &[])
        .unwrap();

    let result = server.find_top_documents("cat").unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(ids(&result), vec![9, 8, 7, 6, 5]);
    assert_sorted_by_relevance(&result);
}

#[test]
fn test_relevance_ties_within_epsilon_sorted_by_rating() {
    let mut server = SearchServer::default();
    // Same tf for "cat" in both; different filler words
    server
        .add_document(1, "cat a", DocumentStatus::Actual, &[1])
        .unwrap();
    server
        .add_document(2, "cat b", DocumentStatus::Actual, &[9])
        .unwrap();
    server
        .add_document(3, "dog", DocumentStatus::Actual, &[5])
        .unwrap();

    let result = server.find_top_documents("cat").unwrap();
    assert_eq!(ids(&result), vec![2, 1]);
}

#[test]
fn test_custom_max_result_count() {
    let config = EngineConfig {
        max_result_count: 2,
        ..EngineConfig::default()
    };
    let mut server = SearchServer::with_config(&config);
    for id in 0..4 {
        server
            .add_document(id, "cat", DocumentStatus::Actual, &[])
            .unwrap();
    }
    server
        .add_document(4, "dog", DocumentStatus::Actual, &[])
        .unwrap();

    assert_eq!(server.find_top_documents("cat").unwrap().len(), 2);
}

#[test]
fn test_deterministic_results() {
    let server = create_pet_server();
    let first = server.find_top_documents("кот ухоженный").unwrap();
    for _ in 0..5 {
        assert_eq!(server.find_top_documents("кот ухоженный").unwrap(), first);
    }
}

#[test]
fn test_term_in_every_document_scores_zero() {
    let mut server = SearchServer::default();
    let ids_added: Vec<DocumentId> = vec![0, 1];
    for &id in &ids_added {
        server
            .add_document(id, "common", DocumentStatus::Actual, &[])
            .unwrap();
    }

    let result = server.find_top_documents("common").unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|d| d.relevance.abs() < EPSILON));
}
