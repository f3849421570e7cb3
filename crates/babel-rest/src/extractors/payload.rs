//! Lenient JSON body extractor.
//!
//! Decodes the body as JSON whatever the `Content-Type` header says. Any body
//! that is not a JSON object of the expected shape is rejected with
//! `400 {"error": "Invalid request payload"}`.

use crate::responses::{error_response, AppError};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use babel_core::{BabelError, ErrorResponse};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON extractor that maps every decode failure to `BabelError::InvalidRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadJson<T>(pub T);

impl<T> std::ops::Deref for PayloadJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for PayloadJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                error_response(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    ErrorResponse::new("Request body too large"),
                )
            } else {
                debug!("Failed to read request body: {}", rejection.body_text());
                AppError(BabelError::InvalidRequest).into_response()
            }
        })?;

        serde_json::from_slice(&bytes).map(PayloadJson).map_err(|e| {
            debug!("Rejecting request payload: {}", e);
            AppError(BabelError::InvalidRequest).into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        lang: String,
    }

    async fn extract(body: &'static str) -> Result<PayloadJson<Payload>, Response> {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        PayloadJson::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_accepts_json_without_content_type() {
        let payload = extract("{\"lang\":\"es\"}").await.unwrap();
        assert_eq!(payload.lang, "es");
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let response = extract("{\"lang\":").await.unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_wrong_shape() {
        let response = extract("[1, 2, 3]").await.unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
