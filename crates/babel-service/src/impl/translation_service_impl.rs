//! Cache-augmented translation service.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CacheLookup, TRANSLATION_TTL};
use crate::dto::{SupportedLanguage, TranslateRequest, TranslationResult};
use crate::provider::TranslationProvider;
use crate::translation_service::TranslationService;
use async_trait::async_trait;
use babel_core::{BabelError, BabelResult, LanguageTag, ValidateExt};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message returned when `/list-languages` is called without a target.
pub const MISSING_TARGET_MESSAGE: &str =
    "You must provide a target language (ex. /list-languages?target=pt)";

/// Translation service backed by a read-through cache and a remote provider.
#[derive(Component)]
#[shaku(interface = TranslationService)]
pub struct TranslationServiceImpl {
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationServiceImpl {
    /// Creates a new translation service.
    pub fn new(cache: Arc<dyn CacheInterface>, provider: Arc<dyn TranslationProvider>) -> Self {
        Self { cache, provider }
    }

    /// Returns the cached translation for `key`, or `None` on any kind of miss.
    ///
    /// Tags may contain `-`, so `("pt-BR", "hi")` and `("pt", "BR-hi")` share
    /// a key; an entry only counts as a hit when its target matches.
    async fn cached(&self, key: &str, target: &LanguageTag) -> Option<TranslationResult> {
        match self.cache.lookup::<TranslationResult>(key).await {
            Ok(CacheLookup::Hit(result)) if &result.target_language == target => {
                debug!(key = %key, "Serving translation from cache");
                Some(result)
            }
            Ok(CacheLookup::Hit(result)) => {
                warn!(
                    key = %key,
                    cached_target = %result.target_language,
                    requested_target = %target,
                    "Cache entry belongs to another language pair; treating as miss"
                );
                None
            }
            Ok(CacheLookup::Miss) => None,
            Ok(CacheLookup::Corrupted(reason)) => {
                warn!(key = %key, reason = %reason, "Ignoring undecodable cache entry");
                None
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cache lookup failed; falling back to provider");
                None
            }
        }
    }

    async fn remember(&self, key: &str, result: &TranslationResult) {
        if let Err(e) = self.cache.set(key, result, TRANSLATION_TTL).await {
            warn!(key = %key, error = %e, "Failed to cache translation");
        }
    }
}

#[async_trait]
impl TranslationService for TranslationServiceImpl {
    async fn translate(&self, request: TranslateRequest) -> BabelResult<TranslationResult> {
        let target = LanguageTag::parse(&request.lang)?;
        request.validate_request()?;

        let key = cache_keys::translation(&target, &request.text);
        if let Some(result) = self.cached(&key, &target).await {
            return Ok(result);
        }

        debug!("Translating into {} via provider", target);
        let translation = self
            .provider
            .translate(std::slice::from_ref(&request.text), &target)
            .await?
            .into_iter()
            .next()
            .ok_or(BabelError::EmptyProviderResponse)?;

        let source_language = if translation.detected_source.trim().is_empty() {
            LanguageTag::undetermined()
        } else {
            LanguageTag::parse(&translation.detected_source).map_err(|_| {
                BabelError::provider(format!(
                    "Translation provider reported an unrecognized source language '{}'",
                    translation.detected_source
                ))
            })?
        };

        let result = TranslationResult {
            source_language,
            target_language: target,
            translated_text: translation.text,
        };

        self.remember(&key, &result).await;
        Ok(result)
    }

    async fn supported_languages(&self, target: &str) -> BabelResult<Vec<SupportedLanguage>> {
        if target.trim().is_empty() {
            return Err(BabelError::validation(MISSING_TARGET_MESSAGE));
        }

        let display_language = LanguageTag::parse(target)?;

        let languages = self
            .provider
            .supported_languages(&display_language)
            .await
            .map_err(|e| BabelError::SupportedLanguages(e.to_string()))?;

        info!(
            "Provider lists {} languages for display language {}",
            languages.len(),
            display_language
        );
        Ok(languages)
    }

    fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }
}

impl std::fmt::Debug for TranslationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationServiceImpl").finish_non_exhaustive()
    }
}
