//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, RoutesResponse, TestResponse};
use babel_core::ErrorResponse;
use babel_service::{SupportedLanguage, TranslateRequest, TranslationEnvelope, TranslationResult};
use utoipa::OpenApi;

/// OpenAPI documentation for the Babel translation API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Babel Translation API",
        description = "Machine translation with a read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::home_controller::index,
        crate::controllers::home_controller::smoke_test,
        crate::controllers::language_controller::list_languages,
        crate::controllers::translation_controller::translate,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            TranslateRequest,
            TranslationResult,
            TranslationEnvelope,
            SupportedLanguage,
            HealthResponse,
            RoutesResponse,
            TestResponse,
        )
    ),
    tags(
        (name = "translation", description = "Translation endpoints"),
        (name = "home", description = "Index and smoke test"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
