//! Error types for the gateway crate.

use activity_core::RegistryError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A roster operation was rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request is malformed, e.g. the `email` query parameter is missing.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Registry(RegistryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            // Remaining registry errors are wrong-state roster transitions.
            GatewayError::Registry(_) => StatusCode::BAD_REQUEST,
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
