//! CLI module - Command line interface definitions and handlers

pub mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use walkdir::WalkDir;

use crate::config::{self, Config, OutputFormat};
use crate::core::Classifier;
use crate::disambiguate::ProbeKind;

use report::Report;

/// filetype-probe - identify files by their content
///
/// Reads the leading bytes of each file, matches them against a table of
/// magic-number signatures and refines shared signatures (ZIP, OLE2, RIFF,
/// MZ) by looking deeper. The file name is never trusted.
#[derive(Parser, Debug)]
#[command(name = "filetype-probe")]
#[command(author = "Ryan Cashmoney <tunclon@proton.me>")]
#[command(version)]
#[command(about = "Identify files by their content, not their name", long_about = None)]
pub struct Cli {
    /// Files or directories to classify
    #[arg(required_unless_present = "init_config")]
    pub paths: Vec<PathBuf>,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Executable subtype probe
    #[arg(long, value_enum)]
    pub probe: Option<ProbeKind>,

    /// Extra signature table, checked before the built-in one (repeatable)
    #[arg(long = "signatures", value_name = "FILE")]
    pub signatures: Vec<PathBuf>,

    /// Walk into directories
    #[arg(long, short)]
    pub recursive: bool,

    /// Maximum depth when walking directories
    #[arg(long, short = 'd', requires = "recursive")]
    pub max_depth: Option<usize>,

    /// Cross-check results against the infer crate
    #[arg(long)]
    pub verify: bool,

    /// Config file (default: ~/.config/filetype-probe/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write a commented sample config and exit
    #[arg(long)]
    pub init_config: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file, then apply command line overrides
    ///
    /// An explicit `--config` must exist; the default location may be absent.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(probe) = self.probe {
            config.classify.executable_probe = probe;
        }
        config.signatures.extra.extend(self.signatures.iter().cloned());
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if self.verify {
            config.output.verify = true;
        }
        if self.no_color {
            config.output.color = false;
        }
        if self.verbose {
            config.general.log_level = "debug".to_string();
        }

        Ok(config)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}

/// Expand the command line paths into the files to classify
///
/// Directories are walked only with `recursive`; otherwise naming one is an
/// error for that input.
pub fn collect_inputs(
    paths: &[PathBuf],
    recursive: bool,
    max_depth: Option<usize>,
) -> Vec<Result<PathBuf>> {
    let mut inputs = Vec::new();

    for path in paths {
        if !path.is_dir() {
            inputs.push(Ok(path.clone()));
            continue;
        }
        if !recursive {
            inputs.push(Err(anyhow::anyhow!(
                "{} is a directory (use --recursive)",
                path.display()
            )));
            continue;
        }

        let mut walker = WalkDir::new(path).follow_links(false).sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => inputs.push(Ok(entry.into_path())),
                Ok(_) => {}
                Err(e) => inputs.push(Err(anyhow::Error::new(e).context("Failed to walk directory"))),
            }
        }
    }

    inputs
}

/// Classify one file into a report
pub fn classify_input(classifier: &Classifier, path: &Path, config: &Config) -> Result<Report> {
    let result = classifier
        .classify_path(path)
        .with_context(|| format!("Failed to classify {}", path.display()))?;
    Ok(Report::new(path, result, config.output.verify))
}

/// Run the CLI; returns whether every input was read
pub fn run(cli: &Cli, config: &Config) -> Result<bool> {
    if cli.init_config {
        let path = cli.config_path();
        if !config::write_sample_config(&path)? {
            bail!("Config already exists: {}", path.display());
        }
        println!("Wrote sample config to {}", path.display());
        return Ok(true);
    }

    colored::control::set_override(config.output.color);

    let classifier = Classifier::from_config(config).context("Failed to load signature tables")?;
    tracing::debug!(?classifier, "Classifier ready");

    let mut all_ok = true;
    for input in collect_inputs(&cli.paths, cli.recursive, cli.max_depth) {
        match input.and_then(|path| classify_input(&classifier, &path, config)) {
            Ok(report) => report.print(config.output.format, config.output.show_size)?,
            Err(e) => {
                report::print_error(&e, config.output.format);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}
