//! core::reference
//!
//! Repository reference parsing.
//!
//! # Accepted Shapes
//!
//! A repository reference is typed by a user in one of three shapes, tried
//! in this order:
//!
//! 1. A URL: `https://github.com/owner/name`, `http://...`, `www....` or
//!    `github.com/...` (a missing scheme is treated as `https://`)
//! 2. An SSH clone URL: `git@github.com:owner/name.git`
//! 3. The shorthand `owner/name`
//!
//! Only one shape is attempted per input. An SSH address is stripped down
//! to its shorthand and then validated as shorthand; there is no fallback
//! from the URL branch.
//!
//! # Whitespace
//!
//! By default only the *first* whitespace character of the input is
//! removed, so `"a b/c"` parses as `ab/c` while `"a b /c"` is rejected.
//! [`WhitespaceMode::All`] removes every whitespace character instead.
//! Whitespace is the ECMAScript `\s` set: a leading byte order mark is
//! stripped, U+0085 is not.
//!
//! # Example
//!
//! ```
//! use reporef::core::reference::{parse_repository_reference, RepositoryReference};
//!
//! let reference = parse_repository_reference("git@github.com:facebook/react.git").unwrap();
//! assert_eq!(reference.owner(), "facebook");
//! assert_eq!(reference.name(), "react");
//!
//! assert!(parse_repository_reference("not a valid ref!!").is_none());
//!
//! let reason = RepositoryReference::parse("https://github.com/too/many/segments").unwrap_err();
//! assert_eq!(reason.to_string(), "expected 2 path segments, found 3");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// The dots in the host alternatives are unescaped wildcards, so `githubXcom/a/b`
// is routed to the URL branch as well.
static URL_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^www.|^github.com|^https?://").unwrap());

static HAS_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

static PATH_TRIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/|/$|\.git$").unwrap());

static SSH_TRIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^git@github.com:|\.git$").unwrap());

static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<owner>[A-Za-z0-9_]+)/(?P<name>[A-Za-z0-9_.\-]+)$").unwrap()
});

/// The ECMAScript `\s` class. Unlike Unicode `White_Space` it includes
/// U+FEFF and excludes U+0085.
pub(crate) const WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(WHITESPACE_CLASS).unwrap());

/// Why an input was rejected.
///
/// The public contract of [`parse_repository_reference`] collapses all of
/// these into `None`; the reason is kept for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after whitespace removal.
    #[error("input is empty")]
    Empty,

    /// The input looked like a URL but could not be parsed as one.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL path did not have exactly `owner/name`.
    #[error("expected 2 path segments, found {0}")]
    SegmentCount(usize),

    /// One of the `owner`/`name` segments was empty.
    #[error("owner and name must be non-empty")]
    EmptySegment,

    /// A component contained a path separator.
    #[error("'{0}' must not contain '/'")]
    ContainsSeparator(String),

    /// The input did not match `owner/name`.
    #[error("expected owner/name")]
    NoMatch,
}

/// How whitespace is removed before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    /// Remove only the first whitespace character.
    #[default]
    First,
    /// Remove every whitespace character.
    All,
}

impl WhitespaceMode {
    /// Valid configuration names.
    pub const NAMES: &'static [&'static str] = &["first", "all"];

    /// Parse a mode from its configuration name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "first" => Some(WhitespaceMode::First),
            "all" => Some(WhitespaceMode::All),
            _ => None,
        }
    }

    /// Get the configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            WhitespaceMode::First => "first",
            WhitespaceMode::All => "all",
        }
    }

    fn sanitize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            WhitespaceMode::First => WHITESPACE.replacen(input, 1, ""),
            WhitespaceMode::All => WHITESPACE.replace_all(input, ""),
        }
    }
}

/// Options controlling [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whitespace removal applied before dispatch.
    pub whitespace: WhitespaceMode,
}

/// A hosted repository identified by owner and name.
///
/// Both components are non-empty and contain no `/`. Invalid values
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference")]
pub struct RepositoryReference {
    owner: String,
    name: String,
}

#[derive(Deserialize)]
struct RawReference {
    owner: String,
    name: String,
}

impl TryFrom<RawReference> for RepositoryReference {
    type Error = ParseError;

    fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
        Self::new(raw.owner, raw.name)
    }
}

impl RepositoryReference {
    /// Create a reference from already separated components.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptySegment`] if either part is empty and
    /// [`ParseError::ContainsSeparator`] if either part contains `/`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, ParseError> {
        let owner = owner.into();
        let name = name.into();

        if owner.is_empty() || name.is_empty() {
            return Err(ParseError::EmptySegment);
        }
        for part in [&owner, &name] {
            if part.contains('/') {
                return Err(ParseError::ContainsSeparator(part.clone()));
            }
        }

        Ok(Self { owner, name })
    }

    /// Parse free-form input with default options, keeping the rejection reason.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_detailed(input, &ParseOptions::default())
    }

    /// The owning user or organization.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the reference, returning `(owner, name)`.
    pub fn into_parts(self) -> (String, String) {
        (self.owner, self.name)
    }

    /// Web URL of the repository under `web_base` (e.g. `https://github.com`).
    pub fn web_url(&self, web_base: &str) -> String {
        format!(
            "{}/{}/{}",
            web_base.trim_end_matches('/'),
            self.owner,
            self.name
        )
    }

    /// HTTPS clone URL of the repository under `web_base`.
    pub fn clone_url(&self, web_base: &str) -> String {
        format!("{}.git", self.web_url(web_base))
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryReference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a repository reference from free-form input.
///
/// Returns `None` for every malformed input; this function never panics
/// and never reports why. Use [`RepositoryReference::parse`] for the reason.
///
/// # Example
///
/// ```
/// use reporef::core::reference::parse_repository_reference;
///
/// let r = parse_repository_reference("github.com/facebook/react/").unwrap();
/// assert_eq!(r.to_string(), "facebook/react");
/// assert!(parse_repository_reference("").is_none());
/// ```
pub fn parse_repository_reference(input: &str) -> Option<RepositoryReference> {
    parse_with(input, &ParseOptions::default())
}

/// Parse with explicit options, collapsing rejection to `None`.
pub fn parse_with(input: &str, options: &ParseOptions) -> Option<RepositoryReference> {
    parse_detailed(input, options).ok()
}

/// Parse with explicit options, keeping the rejection reason.
pub fn parse_detailed(
    input: &str,
    options: &ParseOptions,
) -> Result<RepositoryReference, ParseError> {
    let sanitized = options.whitespace.sanitize(input);
    if sanitized.is_empty() {
        return Err(ParseError::Empty);
    }

    if URL_SHAPED.is_match(&sanitized) {
        return parse_url(&sanitized);
    }

    let shorthand = if sanitized.starts_with("git@") {
        SSH_TRIM.replace_all(&sanitized, "")
    } else {
        Cow::Borrowed(&*sanitized)
    };

    parse_shorthand(&shorthand)
}

/// Parse the URL-shaped branch.
fn parse_url(input: &str) -> Result<RepositoryReference, ParseError> {
    let absolute = if HAS_SCHEME.is_match(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("https://{}", input))
    };

    let url = Url::parse(&absolute).map_err(|e| ParseError::InvalidUrl(e.to_string()))?;

    // All three trims happen in a single left-to-right pass.
    let path = PATH_TRIM.replace_all(url.path(), "");
    let segments: Vec<&str> = path.split('/').collect();

    match segments.as_slice() {
        [owner, name] => RepositoryReference::new(*owner, *name),
        other => Err(ParseError::SegmentCount(other.len())),
    }
}

/// Parse the `owner/name` shorthand.
fn parse_shorthand(input: &str) -> Result<RepositoryReference, ParseError> {
    let caps = SHORTHAND.captures(input).ok_or(ParseError::NoMatch)?;
    RepositoryReference::new(&caps["owner"], &caps["name"])
}
