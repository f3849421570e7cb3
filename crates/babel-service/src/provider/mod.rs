//! Machine-translation provider abstraction.

mod google_client;

pub use google_client::*;

use crate::dto::SupportedLanguage;
use async_trait::async_trait;
use babel_core::{BabelResult, Interface, LanguageTag};

/// One translated text as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTranslation {
    /// Source language detected by the provider (raw provider code).
    pub detected_source: String,
    /// Translated text.
    pub text: String,
}

/// Remote machine-translation service.
#[async_trait]
pub trait TranslationProvider: Interface + Send + Sync {
    /// Translates each text into `target`. Results keep the input order.
    async fn translate(
        &self,
        texts: &[String],
        target: &LanguageTag,
    ) -> BabelResult<Vec<ProviderTranslation>>;

    /// Lists the languages the provider supports, with names in `display_language`.
    async fn supported_languages(
        &self,
        display_language: &LanguageTag,
    ) -> BabelResult<Vec<SupportedLanguage>>;
}
