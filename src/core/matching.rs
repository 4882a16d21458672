//! core::matching
//!
//! Match a team name to one of the user's hosting accounts.
//!
//! # Design
//!
//! When a team is set up from an existing hosting organization, the team
//! name is compared against the logins of the accounts the user belongs
//! to (their personal account and their organizations). The account whose
//! login is most similar wins; see [`crate::core::similarity`] for scoring.
//!
//! Every call reports a [`MatchOutcome`] to a [`MatchReporter`]. Reporting
//! is a side channel and never affects the result.
//!
//! # Example
//!
//! ```
//! use reporef::core::matching::{fuzzy_match_account, Account, AccountKind, NoopReporter};
//!
//! let accounts = vec![
//!     Account::new("octocat", AccountKind::User),
//!     Account::new("acme-corp", AccountKind::Organization),
//! ];
//!
//! let best = fuzzy_match_account("Acme Corp", &accounts, &NoopReporter).unwrap();
//! assert_eq!(best.login, "acme-corp");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::similarity::{find_best_match, Rating};
use crate::ui::output::{self, Verbosity};

/// Kind of hosting account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// A personal account.
    User,
    /// An organization.
    Organization,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::User => write!(f, "user"),
            AccountKind::Organization => write!(f, "organization"),
        }
    }
}

/// A hosting account the user can import from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login, used as the display name for matching.
    pub login: String,
    /// User or organization.
    pub kind: AccountKind,
}

impl Account {
    /// Create an account.
    pub fn new(login: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            login: login.into(),
            kind,
        }
    }
}

/// Outcome of a match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// An account was selected.
    Success,
    /// No account could be selected.
    Failure,
}

impl MatchOutcome {
    /// Event name used when reporting the outcome.
    pub fn event_name(&self) -> &'static str {
        match self {
            MatchOutcome::Success => "match-account-success",
            MatchOutcome::Failure => "match-account-failure",
        }
    }
}

/// Receives match outcomes.
pub trait MatchReporter {
    /// Called once per [`rank_accounts`] or [`fuzzy_match_account`] call.
    fn report(&self, outcome: MatchOutcome, team_name: &str);
}

/// Reporter that discards outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl MatchReporter for NoopReporter {
    fn report(&self, _outcome: MatchOutcome, _team_name: &str) {}
}

/// Reporter that writes outcomes as debug output.
#[derive(Debug, Clone, Copy)]
pub struct OutputReporter {
    verbosity: Verbosity,
}

impl OutputReporter {
    /// Create a reporter writing at the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl MatchReporter for OutputReporter {
    fn report(&self, outcome: MatchOutcome, team_name: &str) {
        output::debug(
            format!("{} (team: {})", outcome.event_name(), team_name),
            self.verbosity,
        );
    }
}

/// An account selection together with the ratings it was chosen from.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountMatch<'a> {
    /// The selected account, `None` only for an empty candidate list.
    pub account: Option<&'a Account>,
    /// Similarity of every candidate login, in candidate order.
    pub ratings: Vec<Rating>,
}

/// Rate every account against `team_name` and select the best one.
///
/// Reports exactly one [`MatchOutcome`] to `reporter`.
pub fn rank_accounts<'a>(
    team_name: &str,
    accounts: &'a [Account],
    reporter: &dyn MatchReporter,
) -> AccountMatch<'a> {
    let logins: Vec<&str> = accounts.iter().map(|a| a.login.as_str()).collect();

    let (account, ratings) = match find_best_match(team_name, &logins) {
        Some(best) => {
            let target = &best.best().target;
            let account = accounts.iter().find(|a| &a.login == target);
            (account, best.ratings)
        }
        None => (None, Vec::new()),
    };

    let outcome = if account.is_some() {
        MatchOutcome::Success
    } else {
        MatchOutcome::Failure
    };
    reporter.report(outcome, team_name);

    AccountMatch { account, ratings }
}

/// Select the account whose login best matches `team_name`.
///
/// Returns the first account whose login equals the best-rated login, so
/// duplicate logins resolve to the earliest entry. Returns `None` only when
/// `accounts` is empty.
pub fn fuzzy_match_account<'a>(
    team_name: &str,
    accounts: &'a [Account],
    reporter: &dyn MatchReporter,
) -> Option<&'a Account> {
    rank_accounts(team_name, accounts, reporter).account
}
