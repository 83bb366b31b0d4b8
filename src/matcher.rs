//! First-match signature lookup and forward byte search.

use memchr::memmem;

use crate::signatures::{SignatureEntry, SignatureTable};

/// Return the first entry, in table order, whose pattern sits at its offset
///
/// Entries that would need bytes past the end of `data` never match.
pub fn first_match<'t>(data: &[u8], table: &'t SignatureTable) -> Option<&'t SignatureEntry> {
    table.iter().find(|entry| entry.matches(data))
}

/// Index of the first occurrence of `pattern` at or after `start`
///
/// An empty pattern, or a `start` past the end, finds nothing.
pub fn find_pattern(data: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    if pattern.is_empty() || start > data.len() {
        return None;
    }
    memmem::find(&data[start..], pattern).map(|pos| start + pos)
}

/// Unanchored substring test
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find_pattern(haystack, needle, 0).is_some()
}
