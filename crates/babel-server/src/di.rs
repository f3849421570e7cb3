//! Dependency injection module using Shaku.
//!
//! `TranslatorModule` wires the Redis cache and the Google provider client
//! into the translation service. Both leaf components are built from
//! configuration and installed as overrides; the service is injected.

use babel_config::AppConfig;
use babel_core::{module, BabelResult};
use babel_service::{
    CacheInterface, GoogleTranslateClient, RedisCacheService, TranslationProvider,
    TranslationServiceImpl,
};
use std::sync::Arc;

module! {
    pub TranslatorModule {
        components = [
            RedisCacheService,
            GoogleTranslateClient,
            TranslationServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the translator module from configuration.
///
/// Creating the Redis pool does not connect, so an unreachable cache
/// server does not prevent startup.
pub fn build_translator_module(config: &AppConfig) -> BabelResult<Arc<TranslatorModule>> {
    let cache = RedisCacheService::from_config(&config.redis)?;
    let provider = GoogleTranslateClient::from_config(&config.provider)?;

    let module = TranslatorModule::builder()
        .with_component_override::<dyn CacheInterface>(Box::new(cache))
        .with_component_override::<dyn TranslationProvider>(Box::new(provider))
        .build();

    Ok(Arc::new(module))
}
