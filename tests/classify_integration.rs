//! Integration tests for filetype-probe
//!
//! Exercises the classifier end to end through files and buffers.

use std::path::{Path, PathBuf};
use tempfile::tempdir;

use filetype_probe::matcher::first_match;
use filetype_probe::{
    ClassificationResult, Classifier, ClassifyError, ProbeKind, SignatureTable, Tag,
};

/// Filler that no built-in signature starts with or continues into
const FILLER: u8 = 0xFF;

fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn utf16le(text: &str) -> Vec<u8> {
    let mut data = vec![0xFF, 0xFE];
    data.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    data
}

/// A minimal ZIP local file header followed by the part names
fn zip_with_parts(parts: &[&str]) -> Vec<u8> {
    let mut data = Vec::new();
    for part in parts {
        data.extend_from_slice(b"PK\x03\x04\x14\x00\x00\x00\x08\x00");
        data.extend_from_slice(&[0u8; 16]);
        data.extend_from_slice(&(part.len() as u16).to_le_bytes());
        data.extend_from_slice(&[0u8; 2]);
        data.extend_from_slice(part.as_bytes());
        data.extend_from_slice(&[0x4B, 0x4D, 0x55, 0x1F]);
    }
    data
}

// ============================================================================
// Signature table
// ============================================================================

#[test]
fn test_every_final_entry_classifies_to_itself() {
    let table = SignatureTable::builtin();
    let classifier = Classifier::default();

    for entry in table.iter() {
        if entry.tag.needs_disambiguation() {
            continue;
        }

        let mut data = vec![FILLER; entry.offset];
        data.extend_from_slice(&entry.pattern);
        data.extend_from_slice(&[FILLER; 8]);

        let matched = first_match(&data, &table).unwrap();
        assert!(
            std::ptr::eq(matched, entry),
            "{} ({}) was matched by {} ({})",
            entry.extension(),
            entry.description,
            matched.extension(),
            matched.description
        );

        let result = classifier.classify_bytes(&data).unwrap();
        assert_eq!(result.extension, entry.extension());
        assert_eq!(result.description, entry.description);
    }
}

#[test]
fn test_truncated_pattern_never_matches_its_entry() {
    let table = SignatureTable::builtin();

    for entry in table.iter() {
        let mut data = vec![FILLER; entry.offset];
        data.extend_from_slice(&entry.pattern[..entry.pattern.len() - 1]);

        if let Some(matched) = first_match(&data, &table) {
            assert!(
                !std::ptr::eq(matched, entry),
                "truncated {} still matched",
                entry.description
            );
        }
    }
}

#[test]
fn test_pdf_version_precedence() {
    let classifier = Classifier::default();
    let result = classifier.classify_bytes(b"%PDF-1.7\n1 0 obj").unwrap();
    assert_eq!(
        result,
        ClassificationResult::new(".pdf", "Adobe Portable Document file (version 1.7)")
    );
}

#[test]
fn test_common_images() {
    let classifier = Classifier::default();

    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    assert_eq!(
        classifier.classify_bytes(&jpeg).unwrap(),
        ClassificationResult::new(".jpg", "JPEG/JIFF file")
    );

    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    assert_eq!(
        classifier.classify_bytes(&png).unwrap(),
        ClassificationResult::new(".png", "Portable Network Graphics")
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn test_office_open_xml_through_files() {
    let dir = tempdir().unwrap();
    let classifier = Classifier::default();

    let docx = write(
        dir.path(),
        "report.zip",
        &zip_with_parts(&["[Content_Types].xml", "_rels/.rels", "word/_rels/document.xml.rels"]),
    );
    let xlsx = write(
        dir.path(),
        "budget.bin",
        &zip_with_parts(&["[Content_Types].xml", "xl/_rels/workbook.xml.rels"]),
    );
    let plain = write(dir.path(), "photos.docx", &zip_with_parts(&["beach.jpg"]));

    assert_eq!(classifier.extension_of(&docx).unwrap(), ".docx");
    assert_eq!(classifier.extension_of(&xlsx).unwrap(), ".xlsx");
    assert_eq!(
        classifier.classify_path(&plain).unwrap(),
        ClassificationResult::new(".zip", "Zip compressed archive")
    );
}

#[test]
fn test_container_marker_past_the_window() {
    // The marker sits far beyond the matching window, so the whole file is read
    let dir = tempdir().unwrap();
    let mut data = zip_with_parts(&["padding.bin"]);
    data.resize(64 * 1024, 0);
    data.extend_from_slice(&zip_with_parts(&["ppt/slides/_rels/slide1.xml.rels"]));
    let path = write(dir.path(), "deck", &data);

    assert_eq!(Classifier::default().extension_of(&path).unwrap(), ".pptx");
}

#[test]
fn test_office_open_xml_through_buffer() {
    let data = zip_with_parts(&["word/_rels/document.xml.rels"]);
    let result = Classifier::default().classify_bytes(&data).unwrap();
    assert_eq!(result.extension, ".docx");
}

#[test]
fn test_buffer_wins_over_file_for_matching() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "image.png", b"not what it claims");
    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    let result = Classifier::default().classify(Some(path.as_path()), Some(&png[..])).unwrap();
    assert_eq!(result.extension, ".png");
}

#[test]
fn test_riff_subtypes() {
    let classifier = Classifier::default();
    let riff = |form: &[u8]| {
        let mut data = b"RIFF\x00\x10\x00\x00".to_vec();
        data.extend_from_slice(form);
        data.resize(32, 0);
        data
    };

    assert_eq!(classifier.classify_bytes(&riff(b"WAVEfmt ")).unwrap().extension, ".wav");
    assert_eq!(classifier.classify_bytes(&riff(b"AVI LIST")).unwrap().extension, ".avi");
    assert_eq!(
        classifier.classify_bytes(&riff(b"QQQQ")).unwrap(),
        ClassificationResult::new("", "Unknown RIFF container subtype")
    );
}

#[test]
fn test_compound_document() {
    let dir = tempdir().unwrap();
    let mut data = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    data.resize(1024, 0);
    data.extend("WordDocument".encode_utf16().flat_map(u16::to_le_bytes));
    let path = write(dir.path(), "letter", &data);

    let result = Classifier::default().classify_path(&path).unwrap();
    assert_eq!(result.extension, ".doc");
}

// ============================================================================
// Executables
// ============================================================================

#[test]
fn test_executable_probes() {
    let dir = tempdir().unwrap();
    let mut pe = vec![0u8; 0x40];
    pe[..2].copy_from_slice(b"MZ");
    pe[0x3C..0x40].copy_from_slice(&0x40u32.to_le_bytes());
    pe.extend_from_slice(b"PE\0\0");
    pe.extend_from_slice(&[0u8; 20]);
    pe.extend_from_slice(&0x20bu16.to_le_bytes());
    pe.resize(0x200, 0);
    let path = write(dir.path(), "tool.dll", &pe);

    let header = Classifier::builder().probe_kind(ProbeKind::Header).build();
    assert_eq!(
        header.classify_path(&path).unwrap(),
        ClassificationResult::new(".exe", "64 bits Windows application")
    );

    let fallback = Classifier::builder().probe_kind(ProbeKind::Extension).build();
    assert_eq!(
        fallback.classify_path(&path).unwrap(),
        ClassificationResult::new(".dll", "")
    );
}

// ============================================================================
// Text and byte-order marks
// ============================================================================

#[test]
fn test_text_sniffing_through_files() {
    let dir = tempdir().unwrap();
    let classifier = Classifier::default();

    let html = write(dir.path(), "index", b"<HTML>\n<body>hi</body>\n</HTML>\n");
    let json = write(dir.path(), "data", br#"{"a":1}"#);
    let mail = write(dir.path(), "message", b"Subject: hi\r\nMIME-Version: 1.0\r\n\r\nbody");
    let notes = write(dir.path(), "notes", b"shopping list\nmilk\n");

    assert_eq!(
        classifier.classify_path(&html).unwrap(),
        ClassificationResult::new(".htm", "Hypertext Markup Language")
    );
    assert_eq!(
        classifier.classify_path(&json).unwrap(),
        ClassificationResult::new(".json", "JavaScript Object Notation")
    );
    assert_eq!(classifier.extension_of(&mail).unwrap(), ".eml");
    assert!(classifier.classify_path(&notes).unwrap().is_unknown());
}

#[test]
fn test_text_sniffing_can_be_disabled() {
    let dir = tempdir().unwrap();
    let html = write(dir.path(), "index", b"<html></html>");

    let classifier = Classifier::builder().text_sniffing(false).build();
    assert!(classifier.classify_path(&html).unwrap().is_unknown());
}

#[test]
fn test_utf16_marked_signature() {
    let data = utf16le("GIF89a");
    let result = Classifier::default().classify_bytes(&data).unwrap();
    assert_eq!(result.extension, ".gif");
}

#[test]
fn test_utf16_marked_html_file() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "page", &utf16le("<!doctype html>\n<html lang=\"en\">\n"));
    assert_eq!(Classifier::default().extension_of(&path).unwrap(), ".htm");
}

#[test]
fn test_repeated_marks_stop_after_one_pass() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "marks", b"+/v+/v+/v%PDF-1.4");
    let result = Classifier::default().classify_path(&path).unwrap();
    assert!(result.is_unknown());
}

// ============================================================================
// Inputs
// ============================================================================

#[test]
fn test_empty_buffer_is_unknown() {
    let result = Classifier::default().classify_bytes(&[]).unwrap();
    assert_eq!(result, ClassificationResult::new("", "Unknown file type"));
}

#[test]
fn test_missing_input() {
    let classifier = Classifier::default();
    assert!(matches!(
        classifier.classify(None, None),
        Err(ClassifyError::InvalidArgument(_))
    ));
    assert!(matches!(
        classifier.classify_path(Path::new("/nonexistent/input.bin")),
        Err(ClassifyError::Io(_))
    ));
}

#[test]
fn test_short_file_reads_what_is_there() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "tiny", b"BM");
    assert_eq!(Classifier::default().extension_of(&path).unwrap(), ".bmp");
}

#[test]
fn test_extra_table_takes_priority() {
    let dir = tempdir().unwrap();
    let table_path = write(
        dir.path(),
        "local.toml",
        br#"
[[signature]]
offset = 0
pattern = "42 4D"
extension = ".dib"
description = "Device independent bitmap"

[[signature]]
pattern = "464F4F"
tag = "zip-container"
description = "Zip flavoured test container"
"#,
    );

    let extra = SignatureTable::entries_from_file(&table_path).unwrap();
    assert_eq!(extra[1].tag, Tag::ZipContainer);

    let table = SignatureTable::builtin().with_priority_entries(extra);
    let classifier = Classifier::builder().table(table).build();

    assert_eq!(classifier.classify_bytes(b"BM\x00\x00").unwrap().extension, ".dib");
    assert_eq!(classifier.classify_bytes(b"FOO").unwrap().extension, ".zip");
}
