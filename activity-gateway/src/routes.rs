//! Axum route handlers for the activity enrollment API.

use std::sync::Arc;

use activity_core::{Activity, ActivityRegistry};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Registry = Arc<ActivityRegistry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query string carried by signup and unregister requests.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation body returned by successful roster changes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given registry.
pub fn create_router(registry: Registry) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup_for_activity))
        .route("/activities/{name}/unregister", delete(unregister_from_activity))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /activities` — every activity with its full roster.
pub async fn list_activities(
    State(registry): State<Registry>,
) -> Json<IndexMap<String, Activity>> {
    Json(registry.list())
}

/// `POST /activities/{name}/signup?email=` — add a student to a roster.
///
/// # Errors
/// Returns [`GatewayError::Registry`] if the activity does not exist or the
/// email is already enrolled, and [`GatewayError::InvalidRequest`] if the
/// `email` query parameter is missing.
pub async fn signup_for_activity(
    State(registry): State<Registry>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Query(EmailQuery { email }) = query?;
    registry.signup(&name, &email)?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {name}"),
    }))
}

/// `DELETE /activities/{name}/unregister?email=` — remove a student from a roster.
///
/// # Errors
/// Returns [`GatewayError::Registry`] if the activity does not exist or the
/// email is not enrolled, and [`GatewayError::InvalidRequest`] if the
/// `email` query parameter is missing.
pub async fn unregister_from_activity(
    State(registry): State<Registry>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Query(EmailQuery { email }) = query?;
    registry.unregister(&name, &email)?;
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {name}"),
    }))
}
