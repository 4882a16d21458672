//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--config <path>`: Use this config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// reporef - Parse repository references and match hosting accounts
#[derive(Parser, Debug)]
#[command(name = "reporef")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a repository reference into owner and name
    #[command(
        long_about = "Parse a repository reference into owner and name.\n\n\
            Accepts the owner/name shorthand, HTTP(S) URLs (with or without scheme), \
            and SSH clone URLs. Exits with status 1 when the input is not a \
            repository reference.",
        after_help = "\
EXAMPLES:
    reporef parse facebook/react
    reporef parse https://github.com/facebook/react.git
    reporef parse git@github.com:facebook/react.git
    reporef parse 'github.com/facebook/react/' --json"
    )]
    Parse {
        /// Free-form repository reference
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Show why the input was rejected
        #[arg(long)]
        explain: bool,

        /// Remove all whitespace before parsing (default: first only)
        #[arg(long)]
        all_whitespace: bool,
    },

    /// Parse a repository reference and look it up on the host
    #[command(after_help = "\
EXAMPLES:
    reporef lookup facebook/react
    GH_TOKEN=... reporef lookup my-org/private-repo --json")]
    Lookup {
        /// Free-form repository reference
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Remove all whitespace before parsing (default: first only)
        #[arg(long)]
        all_whitespace: bool,
    },

    /// Match a team name to the most similar hosting account
    #[command(
        name = "match",
        long_about = "Match a team name to the most similar hosting account.\n\n\
            Candidates come from --user/--org. Without them, the authenticated \
            user's accounts are fetched from the host (requires GH_TOKEN or \
            GITHUB_TOKEN).",
        after_help = "\
EXAMPLES:
    reporef match 'Acme Corp' --user octocat --org acme-corp --org globex
    reporef match 'Acme Corp' --ratings"
    )]
    Match {
        /// Team name to match
        team_name: String,

        /// Personal account login
        #[arg(long, value_name = "LOGIN")]
        user: Option<String>,

        /// Organization login (repeatable)
        #[arg(long = "org", value_name = "LOGIN")]
        orgs: Vec<String>,

        /// Show the similarity of every candidate
        #[arg(long)]
        ratings: bool,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(after_help = "\
EXAMPLES:
    reporef completion bash > ~/.local/share/bash-completion/completions/reporef
    reporef completion zsh > ~/.zfunc/_reporef")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get the effective value of a key
    Get {
        /// Config key (api_base, web_base, parse.whitespace)
        key: String,
    },
    /// Set a key in the config file
    Set {
        /// Config key (api_base, web_base, parse.whitespace)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all keys with their effective values
    List,
    /// Print the config file path
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
