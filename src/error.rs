use std::io;
use thiserror::Error;

/// Errors that can occur while classifying an input
///
/// An unrecognised format is not an error; it is reported as
/// [`ClassificationResult::unknown`](crate::core::ClassificationResult::unknown).
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Errors that can occur when loading a signature table from disk
#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse signature table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid hex pattern in entry {index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Entry {index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("Entry {index} needs either an extension or a tag")]
    MissingTarget { index: usize },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
