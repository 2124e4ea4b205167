//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::posts::MAX_POST_BYTES;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of posts the cache can hold
    pub max_posts: usize,
    /// Lifetime of each post in seconds
    pub post_ttl: u64,
    /// Largest accepted post text in bytes
    pub max_post_bytes: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Credential store location (`memory`, `sqlite::memory:`, `sqlite://path`)
    pub database_url: String,
    /// Token accepted by the static authenticator
    pub auth_token: String,
    /// `max-age` advertised on post listings, in seconds
    pub cache_max_age: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_POSTS` - Maximum cached posts (default: 1000)
    /// - `POST_TTL` - Post lifetime in seconds (default: 300)
    /// - `MAX_POST_BYTES` - Maximum post size (default: 1048576)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `DATABASE_URL` - Credential store (default: sqlite::memory:)
    /// - `AUTH_TOKEN` - Static bearer token (default: dummytoken)
    /// - `CACHE_MAX_AGE` - Cache-Control max-age for listings (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_posts: env_or("MAX_POSTS", defaults.max_posts),
            post_ttl: env_or("POST_TTL", defaults.post_ttl),
            max_post_bytes: env_or("MAX_POST_BYTES", defaults.max_post_bytes),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            auth_token: env::var("AUTH_TOKEN").unwrap_or(defaults.auth_token),
            cache_max_age: env_or("CACHE_MAX_AGE", defaults.cache_max_age),
        }
    }

    pub fn post_ttl(&self) -> Duration {
        Duration::from_secs(self.post_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_posts: 1000,
            post_ttl: 300,
            max_post_bytes: MAX_POST_BYTES,
            server_port: 3000,
            cleanup_interval: 1,
            database_url: "sqlite::memory:".to_string(),
            auth_token: "dummytoken".to_string(),
            cache_max_age: 300,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
