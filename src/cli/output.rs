//! Output formatting for CLI commands
//!
//! Human-readable formatting for command output. Colors respect the
//! NO_COLOR env var.

use crate::core::types::{Document, DocumentId, DocumentStatus};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document ids
    pub fn document_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format a relevance score with fixed precision
pub fn format_relevance(relevance: f64) -> String {
    format!("{relevance:.6}")
}

/// Format a result item as `{ document_id = .., relevance = .., rating = .. }`
pub fn format_document(document: &Document) -> String {
    format!(
        "{{ document_id = {}, relevance = {}, rating = {} }}",
        document.id,
        format_relevance(document.relevance),
        document.rating
    )
}

/// Format matched words and status as `{ status = .., words = [..] }`
pub fn format_match(words: &[String], status: DocumentStatus) -> String {
    format!("{{ status = {}, words = [{}] }}", status, words.join(", "))
}

/// Format document ids as `[1, 5, 9]`
pub fn format_ids(ids: &[DocumentId]) -> String {
    let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
    format!("[{}]", ids.join(", "))
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
