//! Authentication
//!
//! Token issuance and verification sit behind the [`Authenticator`] trait so
//! deployments can plug in a real verifier. The built-in
//! [`StaticTokenAuthenticator`] only compares against one shared token and is
//! meant for testing and local use.

mod static_token;

pub use static_token::StaticTokenAuthenticator;

use thiserror::Error;

use crate::users::User;

/// Reasons a request fails authentication.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,
}

/// Who a verified token belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque subject extracted from the token
    pub subject: String,
}

/// Issues tokens on signup/login and verifies them on protected routes.
pub trait Authenticator: Send + Sync {
    /// Returns the token handed back to `user` after signup or login.
    fn issue_token(&self, user: &User) -> String;

    /// Verifies `token` and returns the caller's identity.
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. Returns None for any other
/// scheme or an empty token.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("  Bearer   abc123  "), Some("abc123"));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_forms() {
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Bearer"), None);
        assert_eq!(extract_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer_token("abc123"), None);
        assert_eq!(extract_bearer_token(""), None);
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(AuthError::MissingToken.to_string(), "Not authenticated");
    }
}
