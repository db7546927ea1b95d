//! Whitespace tokenizer and text validation.
//!
//! Text is split on the ASCII space character only. Other whitespace
//! (tabs, newlines) is a control character and makes the text invalid, so
//! it never reaches the splitter in a valid document or query.

/// Prefix marking an excluded ("minus") query term
pub const EXCLUSION_MARKER: char = '-';

/// Split text into words on single spaces, dropping empty words.
///
/// Consecutive, leading and trailing spaces never produce empty entries.
///
/// # Examples
///
/// ```
/// use sift::core::indexer::split_into_words;
///
/// assert_eq!(split_into_words("  fluffy  cat "), vec!["fluffy", "cat"]);
/// assert!(split_into_words("").is_empty());
/// ```
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Check a word (or a whole raw text) for validity.
///
/// Invalid when it is exactly the bare exclusion marker `-`, or contains
/// any character below U+0020.
pub fn is_valid_word(word: &str) -> bool {
    if word.len() == 1 && word.starts_with(EXCLUSION_MARKER) {
        return false;
    }

    !word.chars().any(is_control_char)
}

/// Validate raw document text before indexing.
///
/// Returns the reason the text was rejected, if any.
pub fn validate_document_text(text: &str) -> Result<(), &'static str> {
    if text.chars().any(is_control_char) {
        return Err("text contains a control character");
    }

    if split_into_words(text).into_iter().any(|word| !is_valid_word(word)) {
        return Err("text contains a bare '-' word");
    }

    Ok(())
}

fn is_control_char(c: char) -> bool {
    c < ' '
}
