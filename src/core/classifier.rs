//! Classifier - the entry point tying matching, disambiguation and text
//! sniffing together.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use super::{ClassificationResult, Source, DEFAULT_WINDOW};
use crate::config::Config;
use crate::disambiguate::{self, bom, compound, container, riff, ProbeKind, SubtypeQuery};
use crate::error::{Result, TableError};
use crate::matcher;
use crate::signatures::{SignatureTable, Tag};
use crate::sniff;

/// How many times a byte-order-marked input is stripped and matched again
pub const MAX_BOM_REENTRIES: usize = 1;

/// Content-based file type classifier
///
/// Cheap to share: the table sits behind an `Arc` and nothing is mutated
/// after construction.
pub struct Classifier {
    table: Arc<SignatureTable>,
    probe: Box<dyn SubtypeQuery>,
    window: usize,
    text_sniffing: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("entries", &self.table.len())
            .field("probe", &self.probe.name())
            .field("window", &self.window)
            .field("text_sniffing", &self.text_sniffing)
            .finish()
    }
}

impl Classifier {
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Build a classifier from the `[classify]` and `[signatures]` sections
    ///
    /// Extra tables are loaded in order and placed before the built-in
    /// entries, so the first listed file has the highest priority.
    pub fn from_config(config: &Config) -> std::result::Result<Self, TableError> {
        let mut extra = Vec::new();
        for path in &config.signatures.extra {
            extra.extend(SignatureTable::entries_from_file(path)?);
        }

        let builtin = SignatureTable::builtin();
        let table = if extra.is_empty() {
            builtin
        } else {
            Arc::new(builtin.with_priority_entries(extra))
        };

        Ok(Self::builder()
            .table(table)
            .probe_kind(config.classify.executable_probe)
            .window(config.classify.window)
            .text_sniffing(config.classify.text_sniffing)
            .build())
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }

    /// Effective window size, never below what the table needs
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn probe_name(&self) -> &'static str {
        self.probe.name()
    }

    /// Classify a file, a buffer, or a buffer with the file it came from
    ///
    /// Fails with `InvalidArgument` when neither is given, and with `Io`
    /// when a needed file read fails. Unrecognised input is not an error.
    pub fn classify(&self, path: Option<&Path>, data: Option<&[u8]>) -> Result<ClassificationResult> {
        let source = Source::new(path, data)?;
        let mut current: Cow<'_, [u8]> = source.window(self.window)?;
        let mut reentries = 0;

        tracing::trace!(
            path = ?source.path(),
            window = current.len(),
            "Classifying"
        );

        loop {
            let Some(entry) = matcher::first_match(&current, &self.table) else {
                break;
            };

            let result = match &entry.tag {
                Tag::Extension(extension) => {
                    ClassificationResult::new(extension.to_string(), entry.description.to_string())
                }
                Tag::ZipContainer => container::resolve(&source.full_content()?),
                Tag::CompoundDocument => compound::resolve(&source.full_content()?),
                Tag::RiffContainer => riff::resolve(&current),
                Tag::Executable => {
                    disambiguate::executable::resolve(&*self.probe, &source, &current)
                }
                Tag::ByteOrderMark => {
                    if reentries >= MAX_BOM_REENTRIES {
                        tracing::debug!(reentries, "Byte-order mark re-entry limit reached");
                        break;
                    }
                    match bom::strip_and_transcode(&current) {
                        Some(transcoded) => {
                            tracing::trace!(mark = %entry.description, "Re-matching without byte-order mark");
                            reentries += 1;
                            current = Cow::Owned(transcoded);
                            continue;
                        }
                        None => break,
                    }
                }
            };

            tracing::debug!(
                extension = %result.extension,
                description = %result.description,
                "Signature matched"
            );
            return Ok(result);
        }

        self.fallback(&source)
    }

    /// Text sniffing for file-backed input, otherwise the Unknown sentinel
    fn fallback(&self, source: &Source<'_>) -> Result<ClassificationResult> {
        let sniffed = match source.path() {
            Some(path) if self.text_sniffing => sniff::sniff(Some(path))?,
            _ => None,
        };

        let result = sniffed.unwrap_or_else(ClassificationResult::unknown);
        tracing::debug!(
            extension = %result.extension,
            description = %result.description,
            "No signature matched"
        );
        Ok(result)
    }

    pub fn classify_path(&self, path: &Path) -> Result<ClassificationResult> {
        self.classify(Some(path), None)
    }

    pub fn classify_bytes(&self, data: &[u8]) -> Result<ClassificationResult> {
        self.classify(None, Some(data))
    }

    /// Just the detected extension of a file, possibly empty
    pub fn extension_of(&self, path: &Path) -> Result<String> {
        Ok(self.classify_path(path)?.extension)
    }
}

/// Builder for [`Classifier`]
pub struct ClassifierBuilder {
    table: Option<Arc<SignatureTable>>,
    probe: Option<Box<dyn SubtypeQuery>>,
    window: usize,
    text_sniffing: bool,
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self {
            table: None,
            probe: None,
            window: DEFAULT_WINDOW,
            text_sniffing: true,
        }
    }
}

impl ClassifierBuilder {
    /// Use `table` instead of the built-in table
    pub fn table(mut self, table: impl Into<Arc<SignatureTable>>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn probe(mut self, probe: impl SubtypeQuery + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    pub fn probe_kind(mut self, kind: ProbeKind) -> Self {
        self.probe = Some(kind.into_query());
        self
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn text_sniffing(mut self, enabled: bool) -> Self {
        self.text_sniffing = enabled;
        self
    }

    pub fn build(self) -> Classifier {
        let table = self.table.unwrap_or_else(SignatureTable::builtin);
        let window = self.window.max(table.required_window());
        if window != self.window {
            tracing::debug!(requested = self.window, window, "Window raised to fit signatures");
        }

        Classifier {
            probe: self.probe.unwrap_or_else(|| ProbeKind::Auto.into_query()),
            table,
            window,
            text_sniffing: self.text_sniffing,
        }
    }
}
