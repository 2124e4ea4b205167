//! Request DTOs for the post service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /signup and POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.email.trim().is_empty() {
            return Some("Email cannot be empty".to_string());
        }
        if self.password.is_empty() {
            return Some("Password cannot be empty".to_string());
        }
        None
    }
}

/// Request body for POST /addPost
#[derive(Debug, Clone, Deserialize)]
pub struct AddPostRequest {
    /// The post text
    pub text: String,
}

/// Request body for POST /deletePost
#[derive(Debug, Clone, Deserialize)]
pub struct DeletePostRequest {
    /// Id returned by addPost
    #[serde(rename = "postID")]
    pub post_id: String,
}
