//! Text sniffing - last resort for files no signature recognised.
//!
//! Markup and mail are recognised by a marker anywhere on a line, JSON by
//! the brackets around the whole trimmed text.

use std::path::Path;

use encoding_rs::UTF_8;

use crate::core::ClassificationResult;
use crate::error::{ClassifyError, Result};

/// Line markers, checked against each lower-cased line in this order
const LINE_MARKERS: &[(&str, &str, &str)] = &[
    ("<?xml", ".xml", "Extensible Markup Language"),
    ("mime-version: 1.0", ".eml", "E-mail markup language file"),
    ("<html", ".htm", "Hypertext Markup Language"),
];

/// Sniff a file-backed input
///
/// Buffer-only input (no path) is rejected with `UnsupportedInput`.
pub fn sniff(path: Option<&Path>) -> Result<Option<ClassificationResult>> {
    match path {
        Some(path) => sniff_path(path),
        None => Err(ClassifyError::UnsupportedInput(
            "text sniffing needs a file path".to_string(),
        )),
    }
}

/// Read the whole file and sniff its text
///
/// A leading byte-order mark selects the decoder; otherwise the bytes are
/// decoded as UTF-8 with invalid sequences replaced.
pub fn sniff_path(path: &Path) -> Result<Option<ClassificationResult>> {
    let bytes = std::fs::read(path)?;
    let (text, encoding, had_errors) = UTF_8.decode(&bytes);
    tracing::trace!(
        path = %path.display(),
        encoding = encoding.name(),
        had_errors,
        "Sniffing text"
    );
    Ok(sniff_text(&text))
}

/// Sniff already decoded text
pub fn sniff_text(text: &str) -> Option<ClassificationResult> {
    for line in text.lines() {
        let lower = line.to_lowercase();
        for &(marker, extension, description) in LINE_MARKERS {
            if lower.contains(marker) {
                return Some(ClassificationResult::new(extension, description));
            }
        }
    }

    let joined = text.lines().collect::<Vec<_>>().join("\n");
    let trimmed = joined.trim();
    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));

    bracketed.then(|| ClassificationResult::new(".json", "JavaScript Object Notation"))
}
