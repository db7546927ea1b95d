//! Stop-word set shared by ingestion and query parsing.

use super::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// Set of words ignored during indexing and query parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build a stop-word set from a collection of words.
    ///
    /// Empty strings are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::default();
        stop_words.extend(words);
        stop_words
    }

    /// Build a stop-word set from space-delimited text
    pub fn from_text(text: &str) -> Self {
        Self::new(split_into_words(text))
    }

    /// Add more words to the set
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !word.is_empty() {
                self.words.insert(word.to_string());
            }
        }
    }

    /// Merge space-delimited words into the set
    pub fn extend_from_text(&mut self, text: &str) {
        self.extend(split_into_words(text));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stop words, keeping the order of the remaining words
    pub fn remove_stop_words<'a>(&self, words: Vec<&'a str>) -> Vec<&'a str> {
        words
            .into_iter()
            .filter(|word| !self.contains(word))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
