//! In-Memory Credential Store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CredentialStore, User};
use crate::error::{ApiError, Result};

#[derive(Debug, Default)]
struct Users {
    by_email: HashMap<String, User>,
    next_id: i64,
}

/// Credential store kept in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: Mutex<Users>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create_user(&self, email: &str, password: &str) -> Result<User> {
        let mut users = self.users.lock().await;
        if users.by_email.contains_key(email) {
            return Err(ApiError::EmailTaken(email.to_string()));
        }

        users.next_id += 1;
        let user = User {
            id: users.next_id,
            email: email.to_string(),
            password: password.to_string(),
        };
        users.by_email.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.lock().await.by_email.get(email).cloned())
    }
}
