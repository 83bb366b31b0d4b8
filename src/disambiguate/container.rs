//! ZIP containers: plain archive or a document format built on ZIP.
//!
//! The part names of an Office Open XML package are stored uncompressed in
//! the local file headers and the central directory, so a plain substring
//! search over the raw archive finds them without inflating anything.

use crate::core::ClassificationResult;
use crate::matcher::contains;

/// Part-name markers in priority order
const MARKERS: &[(&[u8], &str, &str)] = &[
    (b"word/_rels/", ".docx", "Microsoft Word open XML document format"),
    (b"xl/_rels/workbook", ".xlsx", "Microsoft Excel open XML document format"),
    (b"ppt/slides/_rels", ".pptx", "Microsoft PowerPoint open XML document format"),
    (b"CHNKWKS", ".wks", "Microsoft Works"),
    (b"Document.iwa", ".iwa", "iWork Archive"),
];

/// Classify a ZIP-signature input from its entire content
pub fn resolve(content: &[u8]) -> ClassificationResult {
    for &(marker, extension, description) in MARKERS {
        if contains(content, marker) {
            tracing::trace!(
                marker = %String::from_utf8_lossy(marker),
                extension,
                "Zip container marker found"
            );
            return ClassificationResult::new(extension, description);
        }
    }

    ClassificationResult::new(".zip", "Zip compressed archive")
}
