//! Request extractors.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use super::handlers::AppState;
use crate::auth::{extract_bearer_token, AuthError, Identity};
use crate::error::ApiError;

/// Resolves the caller from the `Authorization: Bearer` header.
///
/// Handlers that take an [`Identity`] argument are only reached with a valid
/// token; everything else is answered with 401.
#[async_trait]
impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .to_str()
            .ok()
            .and_then(extract_bearer_token)
            .ok_or(AuthError::InvalidToken)?;

        state.auth.authenticate(token).map_err(|e| {
            debug!("Rejected bearer token: {}", e);
            ApiError::from(e)
        })
    }
}
