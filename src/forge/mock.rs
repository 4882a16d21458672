//! forge::mock
//!
//! Mock host implementation for deterministic testing.
//!
//! # Design
//!
//! The mock host stores repositories and accounts in memory, records
//! every call, and can be configured to fail a given operation.
//!
//! # Example
//!
//! ```
//! use reporef::forge::mock::MockHost;
//! use reporef::forge::RepositoryHost;
//! use reporef::core::reference::RepositoryReference;
//!
//! # tokio_test::block_on(async {
//! let host = MockHost::new();
//! host.add_repository("facebook", "react", "main");
//!
//! let reference = RepositoryReference::new("facebook", "react").unwrap();
//! let repo = host.get_repository(&reference).await.unwrap();
//! assert_eq!(repo.default_branch, "main");
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{ForgeError, RepositoryHost, RepositoryInfo};
use crate::core::matching::Account;
use crate::core::reference::RepositoryReference;

/// Mock host for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockHostInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockHostInner {
    /// Repositories keyed by lowercase `owner/name`.
    repositories: HashMap<String, RepositoryInfo>,
    /// Accounts returned by `list_accounts`.
    accounts: Vec<Account>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail get_repository with the given error.
    GetRepository(ForgeError),
    /// Fail list_accounts with the given error.
    ListAccounts(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    GetRepository { owner: String, name: String },
    ListAccounts,
}

fn key(owner: &str, name: &str) -> String {
    format!("{}/{}", owner, name).to_lowercase()
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a public repository.
    pub fn add_repository(&self, owner: &str, name: &str, default_branch: &str) {
        let info = RepositoryInfo {
            owner: owner.to_string(),
            name: name.to_string(),
            full_name: format!("{}/{}", owner, name),
            default_branch: default_branch.to_string(),
            private: false,
            html_url: format!("https://github.com/{}/{}", owner, name),
        };
        self.lock().repositories.insert(key(owner, name), info);
    }

    /// Set the accounts returned by `list_accounts`.
    pub fn set_accounts(&self, accounts: Vec<Account>) {
        self.lock().accounts = accounts;
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(&self, fail: FailOn) {
        self.lock().fail_on = Some(fail);
    }

    /// Clear any configured failure.
    pub fn clear_failure(&self) {
        self.lock().fail_on = None;
    }

    /// Get the recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockHostInner> {
        // A poisoned lock only means another test thread panicked
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RepositoryHost for MockHost {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositoryInfo, ForgeError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::GetRepository {
            owner: reference.owner().to_string(),
            name: reference.name().to_string(),
        });

        if let Some(FailOn::GetRepository(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .repositories
            .get(&key(reference.owner(), reference.name()))
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(reference.to_string()))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ForgeError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::ListAccounts);

        if let Some(FailOn::ListAccounts(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.accounts.clone())
    }
}
