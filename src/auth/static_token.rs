//! Static Token Authenticator
//!
//! A single shared bearer token, compared in constant time.

use tracing::debug;

use super::{AuthError, Authenticator, Identity};
use crate::users::User;

/// Accepts exactly one shared token and hands that same token to every user.
///
/// Tokens carry no user information, so every caller authenticates as the
/// same identity.
#[derive(Debug, Clone)]
pub struct StaticTokenAuthenticator {
    token: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn issue_token(&self, user: &User) -> String {
        debug!(user_id = user.id, "Issuing static token");
        self.token.clone()
    }

    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        if constant_time_compare(token, &self.token) {
            Ok(Identity {
                subject: self.token.clone(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
