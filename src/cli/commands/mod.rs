//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into `core` or `forge`
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! Commands that talk to the host (`lookup`, `match` without candidates)
//! build a tokio runtime and block on the async host call.

mod completion;
mod config_cmd;
mod lookup;
mod match_cmd;
mod parse;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path, set as config_set};
pub use lookup::{lookup, resolve};
pub use match_cmd::{match_account, MatchReport};
pub use parse::parse;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::reference::{ParseOptions, WhitespaceMode};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Parse {
            input,
            explain,
            all_whitespace,
        } => parse::parse(ctx, &input, parse_options(ctx, all_whitespace), explain),
        Command::Lookup {
            input,
            all_whitespace,
        } => lookup::lookup(ctx, &input, parse_options(ctx, all_whitespace)),
        Command::Match {
            team_name,
            user,
            orgs,
            ratings,
        } => match_cmd::match_account(ctx, &team_name, user.as_deref(), &orgs, ratings),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Parser options from config, with `--all-whitespace` taking precedence.
fn parse_options(ctx: &Context, all_whitespace: bool) -> ParseOptions {
    let mut options = ctx.config.parse_options();
    if all_whitespace {
        options.whitespace = WhitespaceMode::All;
    }
    options
}
