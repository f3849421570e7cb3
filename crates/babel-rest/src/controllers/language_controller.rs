//! Supported-languages controller.

use crate::{
    responses::{method_not_allowed, ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use babel_service::SupportedLanguage;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Query string of `GET /list-languages`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLanguagesQuery {
    /// Language in which to display the language names (e.g. `pt`).
    pub target: Option<String>,
}

/// Creates the language router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/list-languages",
        get(list_languages).fallback(method_not_allowed),
    )
}

/// Lists the languages the provider can translate into.
#[utoipa::path(
    get,
    path = "/list-languages",
    tag = "translation",
    params(ListLanguagesQuery),
    responses(
        (status = 200, description = "Supported languages", body = [SupportedLanguage]),
        (status = 400, description = "Missing or unparseable target", body = babel_core::ErrorResponse),
        (status = 500, description = "Provider failure", body = babel_core::ErrorResponse)
    )
)]
pub async fn list_languages(
    State(state): State<AppState>,
    Query(query): Query<ListLanguagesQuery>,
) -> ApiResult<Vec<SupportedLanguage>> {
    let target = query.target.unwrap_or_default();
    debug!("List languages request: target='{}'", target);

    let languages = state.translation_service.supported_languages(&target).await?;
    ok(languages)
}
