use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::LodgingId;
use super::error::{AccessErrorKind, LodgingAccessError};
use super::service::LodgingService;
use super::session::{AuthenticatedUser, SessionStore};

/// Shared state for the hotel routes.
#[derive(Clone)]
pub struct LodgingState {
    pub service: LodgingService,
    pub sessions: Arc<dyn SessionStore>,
}

/// Router builder exposing the authenticated hotel endpoints.
pub fn lodging_router(state: LodgingState) -> Router {
    Router::new()
        .route("/hotels", get(list_handler))
        .route("/hotels/:hotel_id", get(detail_handler))
        .with_state(state)
}

pub(crate) async fn list_handler(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<LodgingState>,
) -> Response {
    match state.service.all_lodgings(user_id).await {
        Ok(lodgings) => (StatusCode::OK, Json(lodgings)).into_response(),
        Err(err) => access_error_response(err),
    }
}

pub(crate) async fn detail_handler(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<LodgingState>,
    Path(hotel_id): Path<String>,
) -> Response {
    let Ok(raw_id) = hotel_id.trim().parse::<i64>() else {
        let payload = json!({ "error": format!("invalid hotel id '{hotel_id}'") });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    };

    match state.service.lodging_by_id(user_id, LodgingId(raw_id)).await {
        Ok(lodging) => (StatusCode::OK, Json(lodging)).into_response(),
        Err(err) => access_error_response(err),
    }
}

fn access_error_response(err: LodgingAccessError) -> Response {
    let status = match err.kind() {
        AccessErrorKind::NotFound => StatusCode::NOT_FOUND,
        AccessErrorKind::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        AccessErrorKind::Infrastructure => {
            error!(error = %err, "hotel lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
