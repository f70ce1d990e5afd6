use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Error response: a status plus a short message safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: &'static str) -> Self { Self { status, message } }

    pub fn bad_request(message: &'static str) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    /// Map a service failure; storage details are logged, never returned.
    pub fn from_service(e: ServiceError, on_internal: &'static str) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "User not found"),
            ServiceError::Storage(detail) => {
                error!(err = %detail, "{}", on_internal);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, on_internal)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
