//! Core module - result types and the classifier entry point.

mod classifier;
mod source;

pub use classifier::{Classifier, ClassifierBuilder, MAX_BOM_REENTRIES};
pub use source::{read_prefix, Source, DEFAULT_WINDOW};

use serde::{Deserialize, Serialize};

/// Description reported when nothing recognised the input
pub const UNKNOWN_DESCRIPTION: &str = "Unknown file type";

/// The outcome of classifying one input
///
/// Owned by the caller; no reference into the signature table is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Extension including the leading dot, possibly empty
    pub extension: String,
    /// Human readable description
    pub description: String,
}

impl ClassificationResult {
    pub fn new(extension: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            description: description.into(),
        }
    }

    /// The sentinel returned when no signature, disambiguator or text
    /// marker recognised the input
    pub fn unknown() -> Self {
        Self::new("", UNKNOWN_DESCRIPTION)
    }

    pub fn is_unknown(&self) -> bool {
        self.extension.is_empty() && self.description == UNKNOWN_DESCRIPTION
    }

    /// Broad category derived from the extension
    pub fn category(&self) -> FileType {
        FileType::from_extension(&self.extension)
    }
}

/// File type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Code,
    Executable,
    Database,
    Other,
}

impl FileType {
    /// Determine file type from extension (leading dot optional)
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            // Images
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" | "ico" | "cur" | "tif" | "tiff"
            | "heif" | "heic" | "crw" | "psd" | "pspimage" | "img" | "wmf" | "emf" | "cpt"
            | "rdib" | "pal" | "acon" | "cdr" | "dwg" | "jbf" => FileType::Image,

            // Videos
            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "m4v" | "3gp" | "vob" | "amv"
            | "swf" | "ivr" | "rm" | "rmmp" => FileType::Video,

            // Audio
            "mp3" | "wav" | "wma" | "m4a" | "aiff" | "opus" | "ogg" | "flac" | "ra" | "ac3"
            | "mdi" | "rmid" => FileType::Audio,

            // Documents
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "rtf" | "wri" | "wks"
            | "iwa" | "vcf" | "eml" | "msg" | "htm" | "html" | "xml" | "json" | "hlp" | "chm"
            | "webarchive" | "cold" | "shw4" | "dat" => FileType::Document,

            // Archives
            "zip" | "7z" | "gz" | "rar" | "lha" | "arc" | "cab" | "jar" | "xz" | "bz2" | "bnd"
            | "bkf" => FileType::Archive,

            // Code
            "pl" | "dsp" | "reg" => FileType::Code,

            // Executables
            "exe" | "dll" | "elf" | "lnk" => FileType::Executable,

            // Databases
            "mdb" | "accdb" | "mdf" | "sqlite" | "wab" | "pst" | "evt" | "evtx" => {
                FileType::Database
            }

            _ => FileType::Other,
        }
    }

    /// Short lowercase label for display and JSON output
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Audio => "audio",
            FileType::Document => "document",
            FileType::Archive => "archive",
            FileType::Code => "code",
            FileType::Executable => "executable",
            FileType::Database => "database",
            FileType::Other => "other",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
