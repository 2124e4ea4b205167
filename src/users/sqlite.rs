//! SQLite Credential Store
//!
//! Persists users in a `users` table through a sqlx connection pool.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Row,
};
use tracing::{debug, info};

use super::{CredentialStore, User};
use crate::error::{ApiError, Result};

/// Credential store backed by a SQLite `users` table.
///
/// Email uniqueness is enforced by the table's UNIQUE constraint. Every
/// operation checks a connection out of the pool and returns it when the
/// guard drops.
#[derive(Debug, Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to credential store at url={}", url);
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new();
        if url.contains(":memory:") || url.contains("mode=memory") {
            // An in-memory database lives and dies with its connection
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let store = Self {
            pool: pool_options.connect_with(options).await?,
        };
        store.init().await?;

        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )"#,
        )
        .execute(&mut *conn)
        .await?;
        debug!("users table ready");
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn create_user(&self, email: &str, password: &str) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(r#"INSERT INTO users (email, password) VALUES (?, ?)"#)
            .bind(email)
            .bind(password)
            .execute(&mut *conn)
            .await;

        match result {
            Ok(done) => Ok(User {
                id: done.last_insert_rowid(),
                email: email.to_string(),
                password: password.to_string(),
            }),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ApiError::EmailTaken(email.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query(r#"SELECT id, email, password FROM users WHERE email = ?"#)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            email: row.get("email"),
            password: row.get("password"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteCredentialStore {
        SqliteCredentialStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = memory_store().await;

        let user = store.create_user("alice@example.com", "secret").await.unwrap();
        assert!(user.id > 0);

        let found = store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_unknown_email() {
        let store = memory_store().await;
        assert_eq!(store.find_by_email("nobody@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = memory_store().await;

        store.create_user("alice@example.com", "secret").await.unwrap();
        let result = store.create_user("alice@example.com", "other").await;

        assert!(matches!(result, Err(ApiError::EmailTaken(_))));
        let found = store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.unwrap().password, "secret");
    }

    #[tokio::test]
    async fn test_email_lookup_is_exact() {
        let store = memory_store().await;

        store.create_user("alice@example.com", "secret").await.unwrap();
        assert_eq!(store.find_by_email("ALICE@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let dir = std::env::temp_dir().join(format!(
            "mini_posts_{}_file_database_persists",
            std::process::id()
        ));
        if dir.exists() {
            std::fs::remove_dir_all(&dir).unwrap();
        }
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("users.db");
        let url = format!("sqlite://{}", path.display());

        {
            let store = SqliteCredentialStore::connect(&url).await.unwrap();
            store.create_user("alice@example.com", "secret").await.unwrap();
            store.pool.close().await;
        }

        let store = SqliteCredentialStore::connect(&url).await.unwrap();
        let found = store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.password), Some("secret".to_string()));

        store.pool.close().await;
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
