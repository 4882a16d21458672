//! match command - Match a team name to a hosting account

use crate::cli::Context;
use crate::core::matching::{rank_accounts, Account, AccountKind, OutputReporter};
use crate::core::similarity::Rating;
use crate::forge::github::{token_from_env, GitHubHost};
use crate::forge::RepositoryHost;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};
use serde::Serialize;

/// Result of a match, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// The team name that was matched
    pub team_name: String,
    /// The selected account
    pub account: Option<Account>,
    /// Similarity of every candidate, in candidate order
    pub ratings: Vec<Rating>,
}

impl MatchReport {
    /// Match `team_name` against `accounts`.
    pub fn build(ctx: &Context, team_name: &str, accounts: &[Account]) -> Self {
        let ranked = rank_accounts(team_name, accounts, &OutputReporter::new(ctx.verbosity));

        Self {
            team_name: team_name.to_string(),
            account: ranked.account.cloned(),
            ratings: ranked.ratings,
        }
    }
}

/// Candidates given on the command line.
fn accounts_from_args(user: Option<&str>, orgs: &[String]) -> Vec<Account> {
    user.map(|login| Account::new(login, AccountKind::User))
        .into_iter()
        .chain(
            orgs.iter()
                .map(|login| Account::new(login.as_str(), AccountKind::Organization)),
        )
        .collect()
}

/// Fetch candidates from the host.
fn accounts_from_host(ctx: &Context) -> Result<Vec<Account>> {
    let host = GitHubHost::with_api_base(token_from_env(), ctx.config.api_base());
    output::debug(
        format!("Fetching accounts from {}", host.api_base()),
        ctx.verbosity,
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(host.list_accounts())
        .context("Failed to list accounts. Pass --user/--org or set GH_TOKEN")
}

/// Match a team name to the most similar account.
pub fn match_account(
    ctx: &Context,
    team_name: &str,
    user: Option<&str>,
    orgs: &[String],
    show_ratings: bool,
) -> Result<()> {
    let accounts = if user.is_none() && orgs.is_empty() {
        accounts_from_host(ctx)?
    } else {
        accounts_from_args(user, orgs)
    };

    let report = MatchReport::build(ctx, team_name, &accounts);

    if ctx.json {
        output::json(&report)?;
    } else {
        if show_ratings {
            let lines: Vec<String> = report
                .ratings
                .iter()
                .map(|r| format!("{:.3}  {}", r.rating, r.target))
                .collect();
            output::print(output::format_list(&lines, "  "), ctx.verbosity);
        }
        if let Some(account) = &report.account {
            output::print(format!("{} ({})", account.login, account.kind), ctx.verbosity);
        }
    }

    if report.account.is_none() {
        bail!("No accounts to match '{}' against", team_name);
    }
    Ok(())
}
