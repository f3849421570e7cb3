//! Index and smoke-test endpoints.

use crate::{responses::method_not_allowed, state::AppState};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Route index returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoutesResponse {
    /// Path to HTTP method.
    pub routes: BTreeMap<String, String>,
}

/// Smoke-test response returned by `GET /test`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestResponse {
    pub test: String,
}

/// Creates the home router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/test", get(smoke_test).fallback(method_not_allowed))
}

/// Lists the public API routes.
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Public routes", body = RoutesResponse)
    )
)]
pub async fn index() -> Json<RoutesResponse> {
    let routes = [("/list-languages", "GET"), ("/translate", "POST")]
        .into_iter()
        .map(|(path, method)| (path.to_string(), method.to_string()))
        .collect();

    Json(RoutesResponse { routes })
}

/// Always succeeds.
#[utoipa::path(
    get,
    path = "/test",
    tag = "home",
    responses(
        (status = 200, description = "Service answers", body = TestResponse)
    )
)]
pub async fn smoke_test() -> Json<TestResponse> {
    Json(TestResponse {
        test: "success".to_string(),
    })
}
