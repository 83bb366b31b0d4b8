//! Per-file reports in human or JSON form

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::{ClassificationResult, FileType};

/// Second opinion from the `infer` crate
#[derive(Debug, Clone, Serialize)]
pub struct InferCheck {
    pub extension: Option<String>,
    pub mime: Option<String>,
    /// Both agree on the extension, or both found nothing
    pub agrees: bool,
}

/// Classification of one file, ready to print
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub extension: String,
    pub description: String,
    pub category: FileType,
    pub mime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infer: Option<InferCheck>,
}

impl Report {
    pub fn new(path: &Path, result: ClassificationResult, verify: bool) -> Self {
        let category = result.category();
        let mime = mime_for(&result.extension);
        let size = std::fs::metadata(path).ok().map(|m| m.len());
        let infer = verify.then(|| infer_check(path, &result));

        Self {
            path: path.to_path_buf(),
            extension: result.extension,
            description: result.description,
            category,
            mime,
            size,
            infer,
        }
    }

    pub fn print(&self, format: OutputFormat, show_size: bool) -> Result<()> {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(self)?),
            OutputFormat::Human => println!("{}", self.to_human(show_size)),
        }
        Ok(())
    }

    pub fn to_human(&self, show_size: bool) -> String {
        let extension = if self.extension.is_empty() {
            "?".dimmed().to_string()
        } else {
            self.extension.cyan().bold().to_string()
        };
        let description = if self.description.is_empty() {
            "(no description)".dimmed().to_string()
        } else {
            self.description.clone()
        };

        let mut line = format!(
            "{}: {} {} [{}]",
            self.path.display().to_string().bold(),
            extension,
            description,
            self.category.label().dimmed()
        );

        if show_size {
            if let Some(size) = self.size {
                line.push_str(&format!(
                    " {}",
                    humansize::format_size(size, humansize::BINARY).dimmed()
                ));
            }
        }

        if let Some(check) = &self.infer {
            let other = check.extension.as_deref().unwrap_or("none");
            if check.agrees {
                line.push_str(&format!(" {} infer: {}", "✓".green(), other));
            } else {
                line.push_str(&format!(" {} infer: {}", "✗".yellow(), other.yellow()));
            }
        }

        line
    }
}

/// Report an input that could not be classified
pub fn print_error(error: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "error": format!("{error:#}") });
            println!("{value}");
        }
        OutputFormat::Human => eprintln!("{} {:#}", "✗".red(), error),
    }
}

/// MIME type for a dotted extension, `application/octet-stream` when unknown
pub fn mime_for(extension: &str) -> String {
    mime_guess::from_ext(extension.trim_start_matches('.'))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn infer_check(path: &Path, result: &ClassificationResult) -> InferCheck {
    let kind = match infer::get_from_path(path) {
        Ok(kind) => kind,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "infer could not read file");
            None
        }
    };

    let ours = result.extension.trim_start_matches('.').to_lowercase();
    let agrees = match kind {
        Some(kind) => {
            ours == kind.extension()
                || result.category() == FileType::from_extension(kind.extension())
        }
        None => result.is_unknown() || ours.is_empty(),
    };

    InferCheck {
        extension: kind.map(|k| k.extension().to_string()),
        mime: kind.map(|k| k.mime_type().to_string()),
        agrees,
    }
}
