//! Mini Posts - a small post service
//!
//! Signup/login against a credential store, plus short-lived text posts kept
//! in a bounded in-memory cache with TTL expiration and LRU eviction.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod posts;
pub mod tasks;
pub mod users;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, Result};
pub use tasks::spawn_cleanup_task;
