//! Translation-related DTOs.

use babel_core::LanguageTag;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to translate a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslateRequest {
    /// Target language tag (e.g. "en", "pt-BR").
    #[schema(example = "es")]
    pub lang: String,

    /// Text to translate.
    #[validate(length(min = 1, message = "Text to translate must not be empty"))]
    #[schema(example = "hello")]
    pub text: String,
}

impl TranslateRequest {
    /// Creates a new translate request.
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

/// A completed translation. This is also the shape stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Source language as detected by the provider.
    #[schema(value_type = String, example = "en")]
    pub source_language: LanguageTag,
    /// Target language as requested.
    #[schema(value_type = String, example = "es")]
    pub target_language: LanguageTag,
    /// Translated text.
    #[schema(example = "hola")]
    pub translated_text: String,
}

/// Response envelope for `POST /translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationEnvelope {
    pub response: TranslationResult,
}

impl From<TranslationResult> for TranslationEnvelope {
    fn from(response: TranslationResult) -> Self {
        Self { response }
    }
}

/// A language the provider can translate into.
///
/// Serialized as `{"Name": .., "Tag": ..}`, the shape existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SupportedLanguage {
    /// Language tag.
    #[schema(example = "pt")]
    pub tag: String,
    /// Language name in the requested display language.
    #[schema(example = "Portuguese")]
    pub name: String,
}
