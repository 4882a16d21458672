//! cli::commands::lookup
//!
//! Parse a repository reference and confirm it on the host.
//!
//! # Design
//!
//! Parsing happens first and locally; the host is only contacted for a
//! valid reference. Host errors are reported as-is so the user can tell
//! "not a reference" apart from "reference not found".
//!
//! # Example
//!
//! ```bash
//! reporef lookup facebook/react
//! reporef lookup git@github.com:facebook/react.git --json
//! ```

use crate::cli::Context;
use crate::core::reference::{parse_detailed, ParseOptions};
use crate::forge::github::{token_from_env, GitHubHost};
use crate::forge::{ForgeError, RepositoryHost, RepositoryInfo};
use crate::ui::output;
use anyhow::{anyhow, Context as _, Result};

/// Parse `input` and fetch the repository from `host`.
///
/// # Errors
///
/// Fails if `input` is not a repository reference or the host lookup fails.
pub async fn resolve(
    host: &dyn RepositoryHost,
    input: &str,
    options: &ParseOptions,
) -> Result<RepositoryInfo> {
    let reference = parse_detailed(input, options)
        .map_err(|reason| anyhow!("not a repository reference: {:?} ({})", input, reason))?;

    host.get_repository(&reference)
        .await
        .with_context(|| format!("Failed to look up {} on {}", reference, host.name()))
}

/// Look up a repository on GitHub.
pub fn lookup(ctx: &Context, input: &str, options: ParseOptions) -> Result<()> {
    let token = token_from_env();
    output::debug(
        format!(
            "Using API {} ({})",
            ctx.config.api_base(),
            if token.is_some() { "authenticated" } else { "anonymous" }
        ),
        ctx.verbosity,
    );
    let anonymous = token.is_none();
    let host = GitHubHost::with_api_base(token, ctx.config.api_base());

    let rt = tokio::runtime::Runtime::new()?;
    let repo = match rt.block_on(resolve(&host, input, &options)) {
        Ok(repo) => repo,
        Err(err) => {
            if anonymous && matches!(err.downcast_ref::<ForgeError>(), Some(ForgeError::NotFound(_))) {
                output::warn(
                    "private repositories are only visible with GH_TOKEN or GITHUB_TOKEN set",
                    ctx.verbosity,
                );
            }
            return Err(err);
        }
    };

    if ctx.json {
        output::json(&repo)?;
    } else {
        output::print(&repo.full_name, ctx.verbosity);
        output::field("default branch", &repo.default_branch, ctx.verbosity);
        output::field(
            "visibility",
            if repo.private { "private" } else { "public" },
            ctx.verbosity,
        );
        output::field("url", &repo.html_url, ctx.verbosity);
    }

    Ok(())
}
