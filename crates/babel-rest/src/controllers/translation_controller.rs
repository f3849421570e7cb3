//! Translation controller.

use crate::{
    extractors::PayloadJson,
    responses::{method_not_allowed, ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use babel_service::{TranslateRequest, TranslationEnvelope};
use tracing::debug;

/// Creates the translation router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/translate",
        post(translate).fallback(method_not_allowed),
    )
}

/// Translates a text into the requested language.
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translation",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslationEnvelope),
        (status = 400, description = "Invalid payload, language or provider failure", body = babel_core::ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    PayloadJson(request): PayloadJson<TranslateRequest>,
) -> ApiResult<TranslationEnvelope> {
    debug!("Translate request: lang='{}', {} chars", request.lang, request.text.chars().count());

    let result = state.translation_service.translate(request).await?;
    ok(TranslationEnvelope::from(result))
}
