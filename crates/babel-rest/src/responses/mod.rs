//! API response types.

use babel_core::{BabelError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, warn};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub BabelError);

impl From<BabelError> for AppError {
    fn from(err: BabelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "{}", self.0);
        } else if self.0.is_client_error() {
            debug!(code = self.0.error_code(), "{}", self.0);
        } else {
            warn!(code = self.0.error_code(), "{}", self.0);
        }

        error_response(status, ErrorResponse::from_error(&self.0))
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Renders `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorResponse::new("Not found"))
}

/// Fallback for known paths called with the wrong method.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorResponse::new("Method not allowed"),
    )
}
