//! cli
//!
//! Command-line interface layer for reporef.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Parsing and matching live in [`crate::core`],
//! host access in [`crate::forge`]; handlers only wire them together and
//! format output.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Print results as JSON
    pub json: bool,
    /// Loaded configuration
    pub config: Config,
    /// Explicit config file from `--config`
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Build a context from parsed flags, loading configuration.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        // A missing --config file is created by `config set`
        let config = match &cli.config {
            Some(path) if path.exists() => Config::load_from(Some(path)),
            Some(_) => Ok(Config::default()),
            None => Config::load(),
        }
        .context("Failed to load config")?;

        let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
        if let Some(path) = config.loaded_from() {
            output::debug(format!("Loaded config from {}", path.display()), verbosity);
        }

        Ok(Self {
            verbosity,
            json: cli.json,
            config,
            config_path: cli.config.clone(),
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let ctx = Context::from_cli(&cli)?;
    commands::dispatch(cli.command, &ctx)
}
