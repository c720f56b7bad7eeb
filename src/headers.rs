//! Markdown header extraction
//!
//! This module extracts ATX-style headers (`# Title` through `###### Title`)
//! from a Markdown document, preserving file order. Extraction is best-effort:
//! an unreadable file yields an empty header list so a single bad document
//! never aborts a whole scan.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern matches 1-6 `#` markers, at least one whitespace character, and
/// non-empty remaining text. Seven markers or a missing space do not match.
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)").expect("HEADER_PATTERN regex is invalid"));

/// A single header extracted from a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Nesting level, 1-6, from the number of `#` markers
    pub level: usize,
    /// Title text with surrounding whitespace trimmed
    pub title: String,
}

/// Extract all headers from the Markdown file at `path`, in file order.
///
/// Read failures (permissions, invalid UTF-8, file vanished mid-scan) are
/// reported to stderr and produce an empty list rather than an error.
pub fn extract_headers(path: &Path) -> Vec<Header> {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_headers_from_content(&content),
        Err(e) => {
            eprintln!("mdtoc: cannot read '{}': {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Extract headers from already-loaded document content.
pub fn extract_headers_from_content(content: &str) -> Vec<Header> {
    let mut headers = Vec::new();

    for line in content.lines() {
        if let Some(caps) = HEADER_PATTERN.captures(line) {
            let level = caps[1].len();
            let title = caps[2].trim().to_string();
            headers.push(Header { level, title });
        }
    }

    headers
}
