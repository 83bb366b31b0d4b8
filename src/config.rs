//! Configuration Module - User preferences from ~/.ftprobe/config.toml
//!
//! Supports:
//! - Log level
//! - Classification settings (window size, executable probe, text sniffing)
//! - Extra signature tables
//! - Output format and verification defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_WINDOW;
use crate::disambiguate::ProbeKind;

/// filetype-probe configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Classification settings
    pub classify: ClassifyConfig,
    /// Extra signature tables
    pub signatures: SignaturesConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Classification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Bytes read from the start of each file for signature matching
    pub window: usize,
    /// How executable subtypes are determined
    pub executable_probe: ProbeKind,
    /// Fall back to text sniffing when no signature matches
    pub text_sniffing: bool,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            executable_probe: ProbeKind::Auto,
            text_sniffing: true,
        }
    }
}

/// Extra signature tables, checked before the built-in table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaturesConfig {
    /// TOML signature tables, earlier files take priority
    pub extra: Vec<PathBuf>,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: human or json
    pub format: OutputFormat,
    /// Colorize human output
    pub color: bool,
    /// Show file sizes in human output
    pub show_size: bool,
    /// Cross-check results against the infer crate
    pub verify: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
            show_size: true,
            verify: false,
        }
    }
}

impl Config {
    /// Load config from default path or return defaults
    pub fn load() -> Self {
        Self::load_from(&Self::default_path()).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tunclon", "filetype-probe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".ftprobe")
                    .join("config.toml")
            })
    }
}

/// Write the commented sample config to `path` unless a file is already there
pub fn write_sample_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_sample_config())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    tracing::info!("Created sample config at {}", path.display());
    Ok(true)
}

/// Generate a sample config file with comments
pub fn generate_sample_config() -> String {
    r#"# filetype-probe configuration
# Location: ~/.config/filetype-probe/config.toml (or %APPDATA%\tunclon\filetype-probe\config\config.toml on Windows)

[general]
# Log level: trace, debug, info, warn, error
log_level = "info"

[classify]
# Bytes read from the start of each file for signature matching.
# Never smaller than the widest built-in signature.
window = 128

# Executable subtype probe: "auto", "native", "header" or "extension"
#   auto      - native on Windows, extension elsewhere
#   native    - ask the Windows loader (GetBinaryTypeW)
#   header    - parse the MZ/PE/NE headers, works everywhere
#   extension - report the file's own extension
executable_probe = "auto"

# Look for XML, HTML, e-mail and JSON text when no signature matches
text_sniffing = true

[signatures]
# Extra signature tables, checked before the built-in one.
# Each file holds [[signature]] entries:
#
#   [[signature]]
#   offset = 0
#   pattern = "4D5A"
#   extension = ".exe"        # or: tag = "zip-container"
#   description = "Example"
extra = []

[output]
# Report format: "human" or "json"
format = "human"

# Colorize human output
color = true

# Show file sizes in human output
show_size = true

# Cross-check every result against the infer crate
verify = false
"#
    .to_string()
}
