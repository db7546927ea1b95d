//! Query parsing.
//!
//! A raw query is a space-separated list of words. A word prefixed with
//! `-` is a minus word: any document containing it is excluded. Every other
//! word is a plus word that contributes to relevance. Stop words are
//! dropped from both sides.
//!
//! Malformed exclusion syntax is rejected outright:
//! - a lone `-`
//! - a double marker such as `--cat`

use crate::core::error::{Result, SiftError};
use crate::core::indexer::{is_valid_word, split_into_words, StopWords, EXCLUSION_MARKER};
use std::collections::BTreeSet;

/// Parsed query with set semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Words that must occur for a document to be scored
    pub plus_words: BTreeSet<String>,

    /// Words whose presence excludes a document
    pub minus_words: BTreeSet<String>,
}

struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word<'a>(word: &'a str, stop_words: &StopWords) -> Result<QueryWord<'a>> {
    let (data, is_minus) = match word.strip_prefix(EXCLUSION_MARKER) {
        Some(rest) => (rest, true),
        None => (word, false),
    };

    if data.is_empty() {
        return Err(SiftError::InvalidQuery(
            "exclusion marker '-' must be followed by a word".to_string(),
        ));
    }
    if data.starts_with(EXCLUSION_MARKER) {
        return Err(SiftError::InvalidQuery(format!(
            "'{word}' has more than one exclusion marker"
        )));
    }
    if !is_valid_word(data) {
        return Err(SiftError::InvalidQuery(format!(
            "'{word}' contains a control character"
        )));
    }

    Ok(QueryWord {
        data,
        is_minus,
        is_stop: stop_words.contains(data),
    })
}

/// Parse a raw query into plus and minus words.
///
/// A word listed both with and without the marker ends up only in
/// `minus_words`, since exclusion wins anyway.
///
/// # Examples
///
/// ```
/// use sift::core::indexer::StopWords;
/// use sift::core::search::parse_query;
///
/// let stop_words = StopWords::from_text("and");
/// let query = parse_query("cat and -dog cat", &stop_words).unwrap();
/// assert_eq!(query.plus_words.len(), 1);
/// assert!(query.minus_words.contains("dog"));
///
/// assert!(parse_query("--cat", &stop_words).is_err());
/// ```
pub fn parse_query(raw_query: &str, stop_words: &StopWords) -> Result<Query> {
    if !is_valid_word(raw_query) {
        return Err(SiftError::InvalidQuery(
            "query contains a control character or a bare '-'".to_string(),
        ));
    }

    let mut query = Query::default();
    for word in split_into_words(raw_query) {
        let query_word = parse_query_word(word, stop_words)?;
        if query_word.is_stop {
            continue;
        }

        if query_word.is_minus {
            query.minus_words.insert(query_word.data.to_string());
        } else {
            query.plus_words.insert(query_word.data.to_string());
        }
    }

    let Query {
        plus_words,
        minus_words,
    } = &mut query;
    plus_words.retain(|word| !minus_words.contains(word));

    tracing::trace!(
        plus = query.plus_words.len(),
        minus = query.minus_words.len(),
        "parsed query"
    );

    Ok(query)
}
