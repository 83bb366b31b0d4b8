//! filetype-probe Library
//!
//! Content-based file type classification: the leading bytes of a file or
//! buffer are matched against an ordered table of magic-number signatures,
//! and signatures shared by several formats are refined by a second look.
//!
//! # Features
//!
//! - **First-match table**: specific signatures are ordered before the
//!   general ones they share a prefix with
//! - **Container inspection**: ZIP part names, OLE2 stream names and RIFF
//!   form types pick the concrete format
//! - **Executable subtypes**: Win32, Win64, DOS, 16-bit Windows, OS/2, POSIX
//! - **Byte-order marks**: stripped and matched once more
//! - **Text sniffing**: XML, HTML, e-mail and JSON when nothing else matched
//!
//! # Example
//!
//! ```no_run
//! use filetype_probe::Classifier;
//! use std::path::Path;
//!
//! fn main() -> filetype_probe::Result<()> {
//!     let classifier = Classifier::default();
//!
//!     let result = classifier.classify_path(Path::new("attachment.bin"))?;
//!     println!("{} ({})", result.extension, result.description);
//!
//!     let result = classifier.classify_bytes(b"%PDF-1.7\n")?;
//!     assert_eq!(result.extension, ".pdf");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod disambiguate;
pub mod error;
pub mod matcher;
pub mod signatures;
pub mod sniff;

// Re-export commonly used types
pub use config::Config;
pub use core::{ClassificationResult, Classifier, ClassifierBuilder, FileType};
pub use disambiguate::{ExecutableSubtype, ProbeKind, SubtypeQuery};
pub use error::{ClassifyError, Result, TableError};
pub use signatures::{SignatureEntry, SignatureTable, Tag};
