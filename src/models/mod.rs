//! Request and Response models for the post service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddPostRequest, CredentialsRequest, DeletePostRequest};
pub use responses::{
    AddPostResponse, HealthResponse, MessageResponse, PostsResponse, StatsResponse, TokenResponse,
};
