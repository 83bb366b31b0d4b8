//! OLE2 compound documents: Word, Excel, PowerPoint or Outlook.
//!
//! Directory entry names are stored as UTF-16LE, so each stream name is
//! searched for in that encoding across the whole file.

use crate::core::ClassificationResult;
use crate::matcher::contains;

/// Reported when no known stream name is present
pub const GENERIC_DESCRIPTION: &str =
    "Microsoft Office applications (Word, Powerpoint, Excel, Works)";

/// Stream names in priority order. Outlook messages come first because an
/// attached document brings its own streams along.
const STREAMS: &[(&str, &str, &str)] = &[
    ("__substg1.0_", ".msg", "Microsoft Outlook message"),
    ("WordDocument", ".doc", "Microsoft Word document"),
    ("PowerPoint Document", ".ppt", "Microsoft PowerPoint presentation"),
    ("Workbook", ".xls", "Microsoft Excel workbook"),
    ("Book", ".xls", "Microsoft Excel 5.0/95 workbook"),
];

fn utf16le(name: &str) -> Vec<u8> {
    name.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Classify a compound-document input from its entire content
pub fn resolve(content: &[u8]) -> ClassificationResult {
    for &(stream, extension, description) in STREAMS {
        if contains(content, &utf16le(stream)) {
            tracing::trace!(stream, extension, "Compound document stream found");
            return ClassificationResult::new(extension, description);
        }
    }

    ClassificationResult::new("", GENERIC_DESCRIPTION)
}
