//! Signature table - the ordered catalogue of magic bytes.
//!
//! Each entry names an offset, the exact bytes expected there, and either a
//! final extension/description or a tag that routes the match to a
//! disambiguator. Order is priority: the first matching entry wins, so
//! specific patterns sit in front of the general ones that would shadow
//! them.
//!
//! Extra entries can be loaded from TOML files:
//!
//! ```toml
//! [[signature]]
//! offset = 0
//! pattern = "4b444d56"
//! extension = ".vmdk"
//! description = "VMware virtual disk"
//!
//! [[signature]]
//! pattern = "504b0304"
//! tag = "zip-container"
//! description = "Zip or Office Open XML document"
//! ```

mod builtin;

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::TableError;

static BUILTIN: Lazy<Arc<SignatureTable>> =
    Lazy::new(|| Arc::new(SignatureTable::new(builtin::entries())));

/// What a matching entry resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A final result; the extension carries its leading dot
    Extension(Cow<'static, str>),
    /// `MZ` executables, resolved through a [`SubtypeQuery`](crate::disambiguate::SubtypeQuery)
    Executable,
    /// OLE2 structured storage shared by legacy Office formats
    CompoundDocument,
    /// ZIP signature shared by plain archives and Office Open XML
    ZipContainer,
    /// RIFF chunked container (WAV, AVI, WebP, ...)
    RiffContainer,
    /// Text prefixed with a byte-order mark
    ByteOrderMark,
}

impl Tag {
    pub fn needs_disambiguation(&self) -> bool {
        !matches!(self, Tag::Extension(_))
    }
}

/// A single magic-byte signature
#[derive(Debug, Clone)]
pub struct SignatureEntry {
    /// Offset from start where the pattern appears
    pub offset: usize,
    /// Bytes expected at `offset`
    pub pattern: Cow<'static, [u8]>,
    pub tag: Tag,
    pub description: Cow<'static, str>,
}

impl SignatureEntry {
    /// An entry with a final extension
    pub fn new(
        offset: usize,
        pattern: impl Into<Cow<'static, [u8]>>,
        extension: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::tagged(offset, pattern, Tag::Extension(extension.into()), description)
    }

    /// An entry whose match is routed to a disambiguator
    pub fn tagged(
        offset: usize,
        pattern: impl Into<Cow<'static, [u8]>>,
        tag: Tag,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            offset,
            pattern: pattern.into(),
            tag,
            description: description.into(),
        }
    }

    /// The final extension, or empty for disambiguation tags
    pub fn extension(&self) -> &str {
        match &self.tag {
            Tag::Extension(ext) => ext,
            _ => "",
        }
    }

    /// One past the last byte this entry inspects
    pub fn end(&self) -> usize {
        self.offset + self.pattern.len()
    }

    /// Checks whether the bytes at `offset` equal the pattern
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.end() {
            return false;
        }
        data[self.offset..self.end()] == *self.pattern
    }

    /// True when every buffer this entry matches is already claimed by `earlier`
    pub fn is_shadowed_by(&self, earlier: &SignatureEntry) -> bool {
        if earlier.offset < self.offset || earlier.end() > self.end() {
            return false;
        }
        let start = earlier.offset - self.offset;
        self.pattern[start..start + earlier.pattern.len()] == *earlier.pattern
    }
}

/// An immutable, ordered list of signatures
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    pub fn new(entries: Vec<SignatureEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table, constructed once and shared
    pub fn builtin() -> Arc<SignatureTable> {
        Arc::clone(&BUILTIN)
    }

    /// A new table with `extra` entries in front of this table's entries
    pub fn with_priority_entries(&self, extra: Vec<SignatureEntry>) -> Self {
        let mut entries = extra;
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// Parse entries from a TOML document
    pub fn entries_from_toml(content: &str) -> Result<Vec<SignatureEntry>, TableError> {
        let file: TableFile = toml::from_str(content)?;
        file.signature
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_entry(index))
            .collect()
    }

    /// Load entries from a TOML file
    pub fn entries_from_file(path: &Path) -> Result<Vec<SignatureEntry>, TableError> {
        let content = std::fs::read_to_string(path)?;
        let entries = Self::entries_from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded signature table"
        );
        Ok(entries)
    }

    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignatureEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widest `offset + pattern.len()` of any entry
    pub fn required_window(&self) -> usize {
        self.entries.iter().map(SignatureEntry::end).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a SignatureEntry;
    type IntoIter = std::slice::Iter<'a, SignatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    signature: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    offset: usize,
    pattern: String,
    extension: Option<String>,
    tag: Option<TagName>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TagName {
    Executable,
    CompoundDocument,
    ZipContainer,
    RiffContainer,
    ByteOrderMark,
}

impl RawEntry {
    fn into_entry(self, index: usize) -> Result<SignatureEntry, TableError> {
        let compact: String = self.pattern.split_whitespace().collect();
        let pattern =
            hex::decode(compact).map_err(|source| TableError::InvalidPattern { index, source })?;
        if pattern.is_empty() {
            return Err(TableError::EmptyPattern { index });
        }

        let tag = match (self.tag, self.extension) {
            (Some(name), _) => match name {
                TagName::Executable => Tag::Executable,
                TagName::CompoundDocument => Tag::CompoundDocument,
                TagName::ZipContainer => Tag::ZipContainer,
                TagName::RiffContainer => Tag::RiffContainer,
                TagName::ByteOrderMark => Tag::ByteOrderMark,
            },
            (None, Some(ext)) if ext.is_empty() || ext.starts_with('.') => {
                Tag::Extension(Cow::Owned(ext))
            }
            (None, Some(ext)) => Tag::Extension(Cow::Owned(format!(".{ext}"))),
            (None, None) => return Err(TableError::MissingTarget { index }),
        };

        Ok(SignatureEntry::tagged(
            self.offset,
            pattern,
            tag,
            self.description,
        ))
    }
}
