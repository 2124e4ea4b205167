//! API Routes
//!
//! Configures the Axum router with all post service endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_post_handler, delete_post_handler, get_posts_handler, health_handler, login_handler,
    signup_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /signup` - Register and receive a token
/// - `POST /login` - Exchange credentials for a token
/// - `POST /addPost` - Store a post (auth)
/// - `GET /getPosts` - List live posts (auth)
/// - `POST /deletePost` - Delete a post by id (auth)
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit raised above the post size limit
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/addPost", post(add_post_handler))
        .route("/getPosts", get(get_posts_handler))
        .route("/deletePost", post(delete_post_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(state.body_limit()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
