use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

use super::domain::UserId;
use super::repository::RepositoryError;
use super::router::LodgingState;

/// Resolves bearer tokens to the user owning the session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_user(&self, token: &str) -> Result<Option<UserId>, RepositoryError>;
}

/// Extractor yielding the user behind `Authorization: Bearer <token>`.
///
/// Runs before any hotel lookup, so unauthenticated requests never reach the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

#[async_trait]
impl FromRequestParts<LodgingState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &LodgingState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorizationHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthorizationHeader)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidAuthorizationHeader)?;

        let user_id = state
            .sessions
            .find_user(token)
            .await?
            .ok_or(AuthError::UnknownSession)?;

        debug!(%user_id, "session validated");
        Ok(Self(user_id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingAuthorizationHeader,
    #[error("expected 'Authorization: Bearer <token>'")]
    InvalidAuthorizationHeader,
    #[error("no session for the given token")]
    UnknownSession,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::Repository(source) => {
                warn!(error = %source, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AuthError::MissingAuthorizationHeader
            | AuthError::InvalidAuthorizationHeader
            | AuthError::UnknownSession => StatusCode::UNAUTHORIZED,
        };

        let payload = json!({ "error": self.to_string() });
        (status, Json(payload)).into_response()
    }
}
