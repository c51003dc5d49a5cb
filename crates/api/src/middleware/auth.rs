//! Caller identity for handlers that need one.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use vidhub_core::error::CoreError;
use vidhub_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from `Authorization: Bearer <token>`.
///
/// Any handler that mutates state takes this as a parameter; a missing or
/// invalid token rejects the request with 401 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The caller's user id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = |msg: &str| AppError::Core(CoreError::Unauthorized(msg.to_string()));

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let Some(token) = header.strip_prefix("Bearer ") else {
            return Err(unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>",
            ));
        };

        match validate_token(token.trim(), &state.config.jwt) {
            Ok(claims) => Ok(Self {
                user_id: claims.sub,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected access token");
                Err(unauthorized("Invalid or expired token"))
            }
        }
    }
}
