//! forge::traits
//!
//! Host trait definition for looking up repositories and accounts.
//!
//! # Design
//!
//! The `RepositoryHost` trait is async because host operations involve
//! network I/O. All methods return `Result` to handle API errors gracefully.
//! Parsing happens before a host is ever contacted; a host only sees
//! references that are already valid.
//!
//! # Example
//!
//! ```ignore
//! use reporef::core::reference::parse_repository_reference;
//! use reporef::forge::{RepositoryHost, ForgeError};
//!
//! async fn import(host: &dyn RepositoryHost, input: &str) -> Result<(), ForgeError> {
//!     let Some(reference) = parse_repository_reference(input) else {
//!         return Ok(());
//!     };
//!     let repo = host.get_repository(&reference).await?;
//!     println!("Importing {} ({})", repo.full_name, repo.default_branch);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::core::matching::Account;
use crate::core::reference::RepositoryReference;

/// Errors from host operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Repository details returned from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    /// Owner login as reported by the host
    pub owner: String,
    /// Repository name as reported by the host
    pub name: String,
    /// `owner/name` with the host's canonical casing
    pub full_name: String,
    /// Default branch
    pub default_branch: String,
    /// Whether the repository is private
    pub private: bool,
    /// Web URL
    pub html_url: String,
}

/// A service hosting repositories.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, ForgeError>`. Callers should handle:
/// - `AuthRequired` / `AuthFailed`: Ask the user to provide a token
/// - `NotFound`: The repository doesn't exist or isn't visible
/// - `RateLimited`: Back off and retry
/// - `ApiError` / `NetworkError`: Display the error to the user
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Get the host name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Look up a repository.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repository doesn't exist or is not visible
    /// - `AuthFailed` if the token is invalid
    async fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositoryInfo, ForgeError>;

    /// List the accounts the authenticated user can import from.
    ///
    /// The personal account comes first, followed by organizations in the
    /// order the host returns them.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` if no token is configured
    async fn list_accounts(&self) -> Result<Vec<Account>, ForgeError>;
}
