//! API Handlers
//!
//! HTTP request handlers for each post service endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::auth::{Authenticator, Identity, StaticTokenAuthenticator};
use crate::cache::PostCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    AddPostRequest, AddPostResponse, CredentialsRequest, DeletePostRequest, HealthResponse,
    MessageResponse, PostsResponse, StatsResponse, TokenResponse,
};
use crate::posts::{post_id, MAX_POST_BYTES};
use crate::users::{self, CredentialStore};

/// Application state shared across all handlers.
///
/// Every collaborator is an explicit handle; there is no process-wide
/// session or cache.
#[derive(Clone)]
pub struct AppState {
    /// Post cache behind a single mutual-exclusion lock
    pub cache: Arc<Mutex<PostCache>>,
    /// User records
    pub users: Arc<dyn CredentialStore>,
    /// Token issuance and verification
    pub auth: Arc<dyn Authenticator>,
    /// Largest accepted post text in bytes
    pub max_post_bytes: usize,
    /// `max-age` advertised on post listings
    pub cache_max_age: u64,
}

impl AppState {
    /// Creates a new AppState with default post limits.
    pub fn new(
        cache: PostCache,
        users: Arc<dyn CredentialStore>,
        auth: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            users,
            auth,
            max_post_bytes: MAX_POST_BYTES,
            cache_max_age: 300,
        }
    }

    pub fn with_max_post_bytes(mut self, max_post_bytes: usize) -> Self {
        self.max_post_bytes = max_post_bytes;
        self
    }

    pub fn with_cache_max_age(mut self, seconds: u64) -> Self {
        self.cache_max_age = seconds;
        self
    }

    /// Builds the full state from configuration, opening the credential store.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let cache = PostCache::new(config.max_posts, config.post_ttl());
        let users = users::connect(&config.database_url).await?;
        let auth = Arc::new(StaticTokenAuthenticator::new(config.auth_token.clone()));

        Ok(Self::new(cache, users, auth)
            .with_max_post_bytes(config.max_post_bytes)
            .with_cache_max_age(config.cache_max_age))
    }

    /// Request body limit: generous enough that oversized posts still reach
    /// the handler and get a proper "payload too large" answer.
    pub fn body_limit(&self) -> usize {
        self.max_post_bytes.saturating_mul(8).max(2 * 1024 * 1024)
    }
}

/// Handler for POST /signup
///
/// Registers a user and returns a token.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let user = state.users.create_user(&req.email, &req.password).await?;
    info!(user_id = user.id, "User signed up");

    Ok(Json(TokenResponse::new(state.auth.issue_token(&user))))
}

/// Handler for POST /login
///
/// Returns a token when the email exists and the password matches exactly.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    match state.users.find_by_email(&req.email).await? {
        Some(user) if user.password == req.password => {
            info!(user_id = user.id, "User logged in");
            Ok(Json(TokenResponse::new(state.auth.issue_token(&user))))
        }
        _ => {
            debug!("Rejected login attempt");
            Err(ApiError::InvalidCredentials)
        }
    }
}

/// Handler for POST /addPost
///
/// Stores the text under its content-derived id. Oversized texts are rejected
/// before the cache is touched.
pub async fn add_post_handler(
    State(state): State<AppState>,
    _identity: Identity,
    Json(req): Json<AddPostRequest>,
) -> Result<Json<AddPostResponse>> {
    if req.text.len() > state.max_post_bytes {
        return Err(ApiError::PayloadTooLarge {
            size: req.text.len(),
            limit: state.max_post_bytes,
        });
    }

    let id = post_id(&req.text);
    state.cache.lock().await.put(id.clone(), req.text);
    debug!(post_id = %id, "Post stored");

    Ok(Json(AddPostResponse::new(id)))
}

/// Handler for GET /getPosts
///
/// Lists every live post and lets intermediaries cache the listing.
pub async fn get_posts_handler(
    State(state): State<AppState>,
    _identity: Identity,
) -> impl IntoResponse {
    let posts = state.cache.lock().await.values();

    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.cache_max_age),
        )],
        Json(PostsResponse { posts }),
    )
}

/// Handler for POST /deletePost
pub async fn delete_post_handler(
    State(state): State<AppState>,
    _identity: Identity,
    Json(req): Json<DeletePostRequest>,
) -> Result<Json<MessageResponse>> {
    let removed = state.cache.lock().await.delete(&req.post_id);
    if !removed {
        return Err(ApiError::NotFound("Post".to_string()));
    }

    debug!(post_id = %req.post_id, "Post deleted");
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.lock().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
