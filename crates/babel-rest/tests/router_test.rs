//! End-to-end tests of the HTTP surface against in-memory collaborators.

mod common;

use babel_core::LanguageTag;
use babel_service::TranslationResult;
use axum::{body::Body, http::Request};
use babel_config::ServerConfig;
use common::{
    app, app_with_config, get, post_json, send, CountingProvider, MemoryCache, UnreachableCache,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_index_lists_routes() {
    let app = app(Arc::new(MemoryCache::default()), Arc::new(CountingProvider::replying("")));

    let (status, body) = send(app, get("/")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"routes": {"/list-languages": "GET", "/translate": "POST"}})
    );
}

#[tokio::test]
async fn test_smoke_endpoint() {
    let app = app(Arc::new(MemoryCache::default()), Arc::new(CountingProvider::replying("")));

    let (status, body) = send(app, get("/test")).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({"test": "success"}));
}

#[tokio::test]
async fn test_translate_cache_hit_skips_provider() {
    let cache = Arc::new(MemoryCache::default());
    let cached = TranslationResult {
        source_language: LanguageTag::parse("en").unwrap(),
        target_language: LanguageTag::parse("es").unwrap(),
        translated_text: "hola".to_string(),
    };
    cache.insert("es-hello", &serde_json::to_vec(&cached).unwrap());
    let provider = Arc::new(CountingProvider::replying("should not be used"));

    let (status, body) = send(
        app(cache, provider.clone()),
        post_json("/translate", r#"{"lang":"es","text":"hello"}"#),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"response": {"sourceLanguage": "en", "targetLanguage": "es", "translatedText": "hola"}})
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_translate_cache_miss_writes_back() {
    let cache = Arc::new(MemoryCache::default());
    let provider = Arc::new(CountingProvider::replying("salut"));

    let (status, body) = send(
        app(cache.clone(), provider.clone()),
        post_json("/translate", r#"{"lang":"fr","text":"hi"}"#),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["response"]["translatedText"], "salut");
    assert_eq!(body["response"]["targetLanguage"], "fr");
    assert_eq!(provider.calls(), 1);

    let (bytes, ttl) = cache.get("fr-hi").unwrap();
    assert_eq!(ttl, Duration::from_secs(1_296_000));
    let stored: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stored, body["response"]);
}

#[tokio::test]
async fn test_translate_invalid_language() {
    let provider = Arc::new(CountingProvider::replying("x"));

    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), provider.clone()),
        post_json("/translate", r#"{"lang":"not-a-real-lang-code-###","text":"hello"}"#),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().starts_with("Could not parse the target language"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_translate_malformed_payload() {
    let cache = Arc::new(MemoryCache::default());
    let provider = Arc::new(CountingProvider::replying("x"));

    for payload in ["{not json", r#"{"lang":"es"}"#, "[]", ""] {
        let (status, body) = send(
            app(cache.clone(), provider.clone()),
            post_json("/translate", payload),
        )
        .await;

        assert_eq!(status, 400, "payload {:?}", payload);
        assert_eq!(body, json!({"error": "Invalid request payload"}));
    }
    assert_eq!(provider.calls(), 0);
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_slow_request_times_out_with_json_error() {
    let cache = Arc::new(MemoryCache::default());
    let provider = Arc::new(CountingProvider::slow(Duration::from_secs(10)));
    let server_config = ServerConfig {
        request_timeout_secs: 1,
        ..ServerConfig::default()
    };

    let (status, body) = send(
        app_with_config(cache.clone(), provider, &server_config),
        post_json("/translate", r#"{"lang":"es","text":"hello"}"#),
    )
    .await;

    assert_eq!(status, 408);
    assert_eq!(body, json!({"error": "Request timed out"}));
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_rejected_with_json_error() {
    let provider = Arc::new(CountingProvider::replying("x"));
    let server_config = ServerConfig {
        max_body_size: 16,
        ..ServerConfig::default()
    };
    let payload = format!(r#"{{"lang":"es","text":"{}"}}"#, "a".repeat(64));
    let request = Request::builder()
        .method("POST")
        .uri("/translate")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();

    let (status, body) = send(
        app_with_config(Arc::new(MemoryCache::default()), provider.clone(), &server_config),
        request,
    )
    .await;

    assert_eq!(status, 413);
    assert_eq!(body, json!({"error": "Request body too large"}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_colliding_cache_key_is_not_served_for_other_language() {
    let cache = Arc::new(MemoryCache::default());
    let provider = Arc::new(CountingProvider::replying("oi"));

    let (status, _) = send(
        app(cache.clone(), provider.clone()),
        post_json("/translate", r#"{"lang":"pt-BR","text":"hi"}"#),
    )
    .await;
    assert_eq!(status, 200);

    let (status, body) = send(
        app(cache.clone(), provider.clone()),
        post_json("/translate", r#"{"lang":"pt","text":"BR-hi"}"#),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["response"]["targetLanguage"], "pt");
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_translate_with_unreachable_cache() {
    let provider = Arc::new(CountingProvider::replying("hola"));

    let (status, body) = send(
        app(Arc::new(UnreachableCache), provider.clone()),
        post_json("/translate", r#"{"lang":"es","text":"hello"}"#),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["response"]["translatedText"], "hola");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_translate_provider_failure() {
    let cache = Arc::new(MemoryCache::default());

    let (status, body) = send(
        app(cache.clone(), Arc::new(CountingProvider::failing("Bad language pair"))),
        post_json("/translate", r#"{"lang":"es","text":"hello"}"#),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Bad language pair"}));
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_list_languages() {
    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), Arc::new(CountingProvider::replying(""))),
        get("/list-languages?target=pt"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body[0], json!({"Tag": "en", "Name": "Inglês"}));
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_languages_missing_target() {
    let provider = Arc::new(CountingProvider::replying(""));

    for uri in ["/list-languages", "/list-languages?target="] {
        let (status, body) = send(
            app(Arc::new(MemoryCache::default()), provider.clone()),
            get(uri),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({"error": "You must provide a target language (ex. /list-languages?target=pt)"})
        );
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_list_languages_provider_failure() {
    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), Arc::new(CountingProvider::failing("quota exceeded"))),
        get("/list-languages?target=en"),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({"error": "Failed to get supported languages: quota exceeded"})
    );
}

#[tokio::test]
async fn test_unknown_route_and_wrong_method() {
    let provider = Arc::new(CountingProvider::replying(""));

    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), provider.clone()),
        get("/nope"),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "Not found"}));

    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), provider),
        get("/translate"),
    )
    .await;
    assert_eq!(status, 405);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_health_reports_cache() {
    let (status, body) = send(
        app(Arc::new(MemoryCache::default()), Arc::new(CountingProvider::replying(""))),
        get("/health"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache_enabled"], true);
}
