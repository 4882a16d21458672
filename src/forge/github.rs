//! forge::github
//!
//! GitHub host implementation using the REST API.
//!
//! # Endpoints
//!
//! - `GET /repos/{owner}/{repo}` for repository lookup
//! - `GET /user` and `GET /user/orgs` (paginated) for account listing
//!
//! # Authentication
//!
//! A token is optional for public repository lookup and required for
//! account listing. [`token_from_env`] reads `GH_TOKEN`, then
//! `GITHUB_TOKEN`, matching the official GitHub CLI.
//!
//! # Rate Limiting
//!
//! Returns `ForgeError::RateLimited` when limits are hit (HTTP 429, or
//! 403 with `x-ratelimit-remaining: 0`). There is no automatic retry.
//!
//! # Example
//!
//! ```ignore
//! use reporef::forge::github::{token_from_env, GitHubHost};
//! use reporef::forge::RepositoryHost;
//!
//! let host = GitHubHost::new(token_from_env());
//! let reference = "facebook/react".parse()?;
//! let repo = host.get_repository(&reference).await?;
//! println!("{} defaults to {}", repo.full_name, repo.default_branch);
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{ForgeError, RepositoryHost, RepositoryInfo};
use crate::core::config::DEFAULT_API_BASE;
use crate::core::matching::{Account, AccountKind};
use crate::core::reference::RepositoryReference;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "reporef-cli";

/// Organizations requested per page (GitHub's maximum).
const ORGS_PER_PAGE: usize = 100;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// Read a GitHub token from the environment.
///
/// Empty values are ignored.
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|token| !token.trim().is_empty())
}

/// GitHub host implementation.
pub struct GitHubHost {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token, if any
    token: Option<String>,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubHost")
            .field("has_token", &self.token.is_some())
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubHost {
    /// Create a host talking to `api.github.com`.
    pub fn new(token: Option<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a host with a custom API base URL.
    ///
    /// Use this for GitHub Enterprise (`https://host/api/v3`) or tests.
    pub fn with_api_base(token: Option<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            client: Client::new(),
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Check if a token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Issue a GET request and decode the JSON body.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ForgeError> {
        let response = self
            .client
            .get(self.url(path))
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle an API response, parsing JSON on success.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Err(self.error_from_response(response, status).await)
        }
    }

    /// Map an error response to a `ForgeError`.
    async fn error_from_response(&self, response: Response, status: StatusCode) -> ForgeError {
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);

        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN if rate_limit_exhausted => ForgeError::RateLimited,
            StatusCode::FORBIDDEN => ForgeError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl RepositoryHost for GitHubHost {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositoryInfo, ForgeError> {
        let path = format!("repos/{}/{}", reference.owner(), reference.name());
        let repo: GitHubRepository = self.get_json(&path).await.map_err(|e| match e {
            // GitHub's 404 body only says "Not Found"
            ForgeError::NotFound(_) => ForgeError::NotFound(reference.to_string()),
            other => other,
        })?;
        Ok(repo.into())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ForgeError> {
        if !self.has_token() {
            return Err(ForgeError::AuthRequired);
        }

        let user: GitHubAccount = self.get_json("user").await?;
        let mut accounts = vec![Account::new(user.login, AccountKind::User)];

        let mut page: u32 = 1;
        loop {
            let path = format!("user/orgs?per_page={}&page={}", ORGS_PER_PAGE, page);
            let orgs: Vec<GitHubAccount> = self.get_json(&path).await?;
            let page_count = orgs.len();

            accounts.extend(
                orgs.into_iter()
                    .map(|org| Account::new(org.login, AccountKind::Organization)),
            );

            // A short page is the last one
            if page_count < ORGS_PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(accounts)
    }
}

// =============================================================================
// GitHub API types
// =============================================================================

/// GitHub repository response.
#[derive(Debug, Deserialize)]
struct GitHubRepository {
    name: String,
    full_name: String,
    owner: GitHubAccount,
    private: bool,
    html_url: String,
    default_branch: String,
}

impl From<GitHubRepository> for RepositoryInfo {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            owner: repo.owner.login,
            name: repo.name,
            full_name: repo.full_name,
            default_branch: repo.default_branch,
            private: repo.private,
            html_url: repo.html_url,
        }
    }
}

/// GitHub user or organization.
#[derive(Debug, Deserialize)]
struct GitHubAccount {
    login: String,
}

/// GitHub error response.
#[derive(Debug, Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_trailing_slash_trimmed() {
        let host = GitHubHost::with_api_base(None, "https://github.example.com/api/v3/");
        assert_eq!(host.api_base(), "https://github.example.com/api/v3");
        assert_eq!(
            host.url("repos/a/b"),
            "https://github.example.com/api/v3/repos/a/b"
        );
    }

    #[test]
    fn default_api_base() {
        let host = GitHubHost::new(None);
        assert_eq!(host.api_base(), "https://api.github.com");
        assert!(!host.has_token());
    }

    #[test]
    fn headers_without_token() {
        let host = GitHubHost::new(None);
        let headers = host.headers().unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(USER_AGENT).unwrap(), USER_AGENT_VALUE);
    }

    #[test]
    fn headers_with_token() {
        let host = GitHubHost::new(Some("ghp_test".into()));
        let headers = host.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ghp_test");
    }

    #[test]
    fn invalid_token_is_auth_error() {
        let host = GitHubHost::new(Some("bad\ntoken".into()));
        assert!(matches!(host.headers(), Err(ForgeError::AuthFailed(_))));
    }

    #[test]
    fn debug_hides_token() {
        let host = GitHubHost::new(Some("ghp_secret".into()));
        let debug = format!("{:?}", host);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("has_token: true"));
    }

    #[test]
    fn repository_conversion() {
        let repo = GitHubRepository {
            name: "react".into(),
            full_name: "facebook/react".into(),
            owner: GitHubAccount {
                login: "facebook".into(),
            },
            private: false,
            html_url: "https://github.com/facebook/react".into(),
            default_branch: "main".into(),
        };
        let info: RepositoryInfo = repo.into();
        assert_eq!(info.owner, "facebook");
        assert_eq!(info.default_branch, "main");
    }
}
