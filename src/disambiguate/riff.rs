//! RIFF containers: the form type decides the concrete format.

use crate::core::ClassificationResult;
use crate::matcher::contains;

pub const UNKNOWN_SUBTYPE: &str = "Unknown RIFF container subtype";

/// Form-type markers, checked in this order
const FORMS: &[(&[u8], &str, &str)] = &[
    (b"WAVE", ".wav", "Waveform Audio File"),
    (b"AVI", ".avi", "Audio Video Interleave video"),
    (b"WEBP", ".webp", "WebP image"),
    (b"ACON", ".acon", "Windows animated cursor"),
    (b"AMV", ".amv", "MTV Video"),
    (b"BND", ".bnd", "RIFF Bundle File"),
    (b"CDR", ".cdr", "Coreldraw"),
    (b"PAL", ".pal", "RIFF Palette File"),
    (b"RDIB", ".rdib", "RIFF DIB bitmap"),
    (b"RMID", ".rmid", "RIFF MIDI music file"),
    (b"RMMP", ".rmmp", "RIFF Multimedia Movie"),
    (b"SHW4", ".shw4", "Corel Presentations slide show"),
];

/// Classify a RIFF-signature input from its header window
///
/// The window is upper-cased as ASCII text and searched anywhere for a
/// form marker, not only at the canonical offset 8.
pub fn resolve(window: &[u8]) -> ClassificationResult {
    let upper = window.to_ascii_uppercase();

    for &(marker, extension, description) in FORMS {
        if contains(&upper, marker) {
            return ClassificationResult::new(extension, description);
        }
    }

    ClassificationResult::new("", UNKNOWN_SUBTYPE)
}
