//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use crate::cli::Context;
use crate::core::config::{Config, KEYS};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// The file `config set` writes to: `--config` if given, else the canonical path.
fn target_path(ctx: &Context) -> Result<PathBuf> {
    match &ctx.config_path {
        Some(path) => Ok(path.clone()),
        None => Config::config_path().context("Failed to determine config path"),
    }
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx.config.get(key)?;
    println!("{}", value);
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = target_path(ctx)?;

    // Start from the file being written, not from the merged view
    let mut config = if path.exists() {
        Config::load_from(Some(&path)).context("Failed to load config")?
    } else {
        Config::default()
    };

    config.set(key, value)?;
    Config::write(&path, &config.global).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    output::debug(format!("Wrote {}", path.display()), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    if ctx.json {
        let mut map = serde_json::Map::new();
        for key in KEYS {
            map.insert(key.to_string(), ctx.config.get(key)?.into());
        }
        output::json(&map)?;
        return Ok(());
    }

    for key in KEYS {
        println!("{} = {}", key, ctx.config.get(key)?);
    }
    Ok(())
}

/// Print the config file path.
pub fn path(ctx: &Context) -> Result<()> {
    let path = match ctx.config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => target_path(ctx)?,
    };
    println!("{}", path.display());
    Ok(())
}
