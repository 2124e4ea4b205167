//! API Module
//!
//! HTTP handlers and routing for the post service REST API.
//!
//! # Endpoints
//! - `POST /signup` - Register a user
//! - `POST /login` - Log in
//! - `POST /addPost` - Store a post
//! - `GET /getPosts` - List live posts
//! - `POST /deletePost` - Delete a post
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
