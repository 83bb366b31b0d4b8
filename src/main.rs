//! filetype-probe - identify files by their content
//!
//! Prints the detected extension and description of every file given on
//! the command line, in human or JSON form.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use filetype_probe::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging
    let directive = format!("filetype_probe={}", config.general.log_level);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    if !cli::run(&cli, &config)? {
        std::process::exit(1);
    }

    Ok(())
}
