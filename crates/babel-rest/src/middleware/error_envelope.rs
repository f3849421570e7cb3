//! Rewrites bodiless error responses from tower layers into the JSON envelope.

use crate::responses::error_response;
use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::Response,
};
use babel_core::ErrorResponse;

/// Gives 408 and 413 responses produced by the timeout and body-limit
/// layers the same `{"error": ...}` body as every other failure.
pub async fn json_error_envelope(response: Response) -> Response {
    if is_json(&response) {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => error_response(
            StatusCode::REQUEST_TIMEOUT,
            ErrorResponse::new("Request timed out"),
        ),
        StatusCode::PAYLOAD_TOO_LARGE => error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorResponse::new("Request body too large"),
        ),
        _ => response,
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
