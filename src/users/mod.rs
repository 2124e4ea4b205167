//! Credential Store
//!
//! Persists user records keyed by a unique email. Passwords are stored and
//! compared as plaintext.

mod memory;
mod sqlite;

pub use memory::MemoryCredentialStore;
pub use sqlite::SqliteCredentialStore;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Storage for user records.
///
/// `create_user` must be atomic with respect to concurrent signups: two
/// calls with the same email never both succeed.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Creates a user, failing with `ApiError::EmailTaken` if the email is
    /// already registered.
    async fn create_user(&self, email: &str, password: &str) -> Result<User>;

    /// Looks a user up by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Opens the credential store named by `url`.
///
/// `memory` selects the process-local store; anything else is handed to
/// SQLite (e.g. `sqlite::memory:` or `sqlite://users.db`).
pub async fn connect(url: &str) -> Result<Arc<dyn CredentialStore>> {
    if url == "memory" {
        info!("Using in-process credential store");
        return Ok(Arc::new(MemoryCredentialStore::new()));
    }

    Ok(Arc::new(SqliteCredentialStore::connect(url).await?))
}
