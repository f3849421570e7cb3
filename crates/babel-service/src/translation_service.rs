//! Translation service trait definition.

use crate::dto::{SupportedLanguage, TranslateRequest, TranslationResult};
use async_trait::async_trait;
use babel_core::{BabelResult, Interface};

/// Translation service trait.
#[async_trait]
pub trait TranslationService: Interface + Send + Sync {
    /// Translates a text, serving repeated requests from the cache.
    async fn translate(&self, request: TranslateRequest) -> BabelResult<TranslationResult>;

    /// Lists supported languages with names in the `target` display language.
    async fn supported_languages(&self, target: &str) -> BabelResult<Vec<SupportedLanguage>>;

    /// Whether a translation cache is configured.
    fn cache_enabled(&self) -> bool;
}
