//! Shared fixtures for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use babel_config::ServerConfig;
use babel_core::{BabelError, BabelResult, LanguageTag};
use babel_rest::{create_router, AppState};
use babel_service::{
    CacheInterface, ProviderTranslation, SupportedLanguage, TranslationProvider,
    TranslationServiceImpl,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// In-memory cache.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Vec<u8>, Duration)>>,
}

impl MemoryCache {
    pub fn insert(&self, key: &str, value: &[u8]) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), Duration::from_secs(60)));
    }

    pub fn get(&self, key: &str) -> Option<(Vec<u8>, Duration)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    async fn get_raw(&self, key: &str) -> BabelResult<Option<Vec<u8>>> {
        Ok(self.get(key).map(|(v, _)| v))
    }

    async fn set_raw(&self, key: &str, value: &[u8], ttl: Duration) -> BabelResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), ttl));
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Cache whose server refuses every connection.
pub struct UnreachableCache;

#[async_trait]
impl CacheInterface for UnreachableCache {
    async fn get_raw(&self, _key: &str) -> BabelResult<Option<Vec<u8>>> {
        Err(BabelError::cache("Failed to get Redis connection: connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &[u8], _ttl: Duration) -> BabelResult<()> {
        Err(BabelError::cache("Failed to get Redis connection: connection refused"))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Provider that counts calls and answers every translation with `reply`.
pub struct CountingProvider {
    calls: AtomicUsize,
    reply: String,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl CountingProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply: reply.to_string(),
            failure: None,
            delay: None,
        }
    }

    /// Replies only after `delay` has passed.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying("late")
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for CountingProvider {
    async fn translate(
        &self,
        texts: &[String],
        _target: &LanguageTag,
    ) -> BabelResult<Vec<ProviderTranslation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.failure {
            return Err(BabelError::provider(message.clone()));
        }
        Ok(texts
            .iter()
            .map(|_| ProviderTranslation {
                detected_source: "en".to_string(),
                text: self.reply.clone(),
            })
            .collect())
    }

    async fn supported_languages(
        &self,
        _display_language: &LanguageTag,
    ) -> BabelResult<Vec<SupportedLanguage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(BabelError::provider(message.clone()));
        }
        Ok(vec![
            SupportedLanguage {
                tag: "en".to_string(),
                name: "Inglês".to_string(),
            },
            SupportedLanguage {
                tag: "es".to_string(),
                name: "Espanhol".to_string(),
            },
        ])
    }
}

/// Builds the full router around the given cache and provider.
pub fn app(cache: Arc<dyn CacheInterface>, provider: Arc<CountingProvider>) -> Router {
    app_with_config(cache, provider, &ServerConfig::default())
}

/// Builds the full router with custom server settings.
pub fn app_with_config(
    cache: Arc<dyn CacheInterface>,
    provider: Arc<CountingProvider>,
    server_config: &ServerConfig,
) -> Router {
    let service = Arc::new(TranslationServiceImpl::new(cache, provider));
    create_router(AppState::new(service), server_config)
}

/// Sends a request and returns the status and decoded JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (u16, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
