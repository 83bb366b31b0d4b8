//! Byte-order marks: strip the mark, fold the text down to one byte per
//! character and hand it back for another matching pass.

use encoding_rs::{Encoding, GB18030, UTF_16BE, UTF_16LE, UTF_8};

/// Recognised byte-order marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf32Le,
    Utf32Be,
    UtfEbcdic,
    Gb18030,
    Utf8,
    Utf7,
    Scsu,
    Bocu1,
    Utf1,
    Utf16Be,
    Utf16Le,
}

/// Marks grouped longest first so a 4-byte mark is never mistaken for the
/// 2-byte mark it begins with
const MARKS: &[(&[u8], BomKind)] = &[
    (&[0xFF, 0xFE, 0x00, 0x00], BomKind::Utf32Le),
    (&[0x00, 0x00, 0xFE, 0xFF], BomKind::Utf32Be),
    (&[0xDD, 0x73, 0x66, 0x73], BomKind::UtfEbcdic),
    (&[0x84, 0x31, 0x95, 0x33], BomKind::Gb18030),
    (&[0xEF, 0xBB, 0xBF], BomKind::Utf8),
    (&[0x2B, 0x2F, 0x76], BomKind::Utf7),
    (&[0x0E, 0xFE, 0xFF], BomKind::Scsu),
    (&[0xFB, 0xEE, 0x28], BomKind::Bocu1),
    (&[0xF7, 0x64, 0x4C], BomKind::Utf1),
    (&[0xFE, 0xFF], BomKind::Utf16Be),
    (&[0xFF, 0xFE], BomKind::Utf16Le),
];

impl BomKind {
    /// Detect a mark at the start of `data`
    pub fn detect(data: &[u8]) -> Option<(BomKind, usize)> {
        MARKS
            .iter()
            .find(|(mark, _)| data.starts_with(mark))
            .map(|&(mark, kind)| (kind, mark.len()))
    }

    fn encoding(self) -> Option<&'static Encoding> {
        match self {
            BomKind::Utf8 => Some(UTF_8),
            BomKind::Utf16Le => Some(UTF_16LE),
            BomKind::Utf16Be => Some(UTF_16BE),
            BomKind::Gb18030 => Some(GB18030),
            _ => None,
        }
    }
}

/// Strip a leading mark and transcode the rest to single-byte text
///
/// ASCII characters are kept and every other character becomes `?`.
/// Returns `None` when `data` does not start with a known mark.
pub fn strip_and_transcode(data: &[u8]) -> Option<Vec<u8>> {
    let (kind, len) = BomKind::detect(data)?;
    let body = &data[len..];

    let text: String = match kind {
        BomKind::Utf32Le => decode_utf32(body, u32::from_le_bytes),
        BomKind::Utf32Be => decode_utf32(body, u32::from_be_bytes),
        _ => match kind.encoding() {
            Some(encoding) => encoding.decode_without_bom_handling(body).0.into_owned(),
            // No decoder for the remaining marks; their ASCII range passes through
            None => body.iter().map(|&b| char::from(b)).collect(),
        },
    };

    tracing::trace!(?kind, mark_len = len, chars = text.len(), "Stripped byte-order mark");
    Some(text.chars().map(to_single_byte).collect())
}

fn decode_utf32(body: &[u8], read: fn([u8; 4]) -> u32) -> String {
    body.chunks_exact(4)
        .map(|unit| {
            let value = read([unit[0], unit[1], unit[2], unit[3]]);
            char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

fn to_single_byte(c: char) -> u8 {
    if c.is_ascii() {
        c as u8
    } else {
        b'?'
    }
}
