//! Input plumbing: where the bytes under inspection come from.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ClassifyError, Result};

/// Bytes read from the start of a file for signature matching
pub const DEFAULT_WINDOW: usize = 128;

/// A validated classification input: a file path, a byte buffer, or both
///
/// When both are present the buffer is used for signature matching and the
/// path backs the steps that need the whole file or the file name.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    path: Option<&'a Path>,
    data: Option<&'a [u8]>,
}

impl<'a> Source<'a> {
    /// Fails with `InvalidArgument` when neither a path nor a buffer is given
    pub fn new(path: Option<&'a Path>, data: Option<&'a [u8]>) -> Result<Self> {
        let path = path.filter(|p| !p.as_os_str().is_empty());
        if path.is_none() && data.is_none() {
            return Err(ClassifyError::InvalidArgument(
                "either a file path or a byte buffer is required".to_string(),
            ));
        }
        Ok(Self { path, data })
    }

    pub fn path(&self) -> Option<&'a Path> {
        self.path
    }

    pub fn data(&self) -> Option<&'a [u8]> {
        self.data
    }

    /// The leading window used for signature matching
    ///
    /// A supplied buffer is used as-is; otherwise at most `window` bytes are
    /// read from the file.
    pub fn window(&self, window: usize) -> Result<Cow<'a, [u8]>> {
        match (self.data, self.path) {
            (Some(data), _) => Ok(Cow::Borrowed(data)),
            (None, Some(path)) => Ok(Cow::Owned(read_prefix(path, window)?)),
            (None, None) => Err(ClassifyError::InvalidArgument(
                "no input to read".to_string(),
            )),
        }
    }

    /// The entire content, re-read from disk when a path is available
    pub fn full_content(&self) -> Result<Cow<'a, [u8]>> {
        match (self.path, self.data) {
            (Some(path), _) => Ok(Cow::Owned(std::fs::read(path)?)),
            (None, Some(data)) => Ok(Cow::Borrowed(data)),
            (None, None) => Err(ClassifyError::InvalidArgument(
                "no input to read".to_string(),
            )),
        }
    }

    /// The original file name's extension with a leading dot, or empty
    pub fn dotted_extension(&self) -> String {
        self.path
            .and_then(|p| p.extension())
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Read up to `limit` bytes from the start of a file
///
/// Short files yield a short buffer; the handle is closed when this returns.
pub fn read_prefix(path: &Path, limit: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
