//! Client for the Google Cloud Translation v2 REST API.

use super::{ProviderTranslation, TranslationProvider};
use crate::dto::SupportedLanguage;
use async_trait::async_trait;
use babel_config::ProviderConfig;
use babel_core::{BabelError, BabelResult, LanguageTag};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use shaku::Component;
use tracing::debug;

const TRANSLATE_PATH: &str = "/language/translate/v2";
const LANGUAGES_PATH: &str = "/language/translate/v2/languages";

/// Google Cloud Translation client authenticated with an API key.
#[derive(Component)]
#[shaku(interface = TranslationProvider)]
pub struct GoogleTranslateClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleTranslateClient {
    /// Creates a client from provider configuration.
    pub fn from_config(config: &ProviderConfig) -> BabelResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BabelError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.api_key, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a [String],
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    #[serde(default)]
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    #[serde(default)]
    languages: Vec<GoogleLanguage>,
}

#[derive(Debug, Deserialize)]
struct GoogleLanguage {
    language: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        texts: &[String],
        target: &LanguageTag,
    ) -> BabelResult<Vec<ProviderTranslation>> {
        debug!("Google translate: {} text(s) into {}", texts.len(), target);

        let body = TranslateBody {
            q: texts,
            target: target.as_str(),
            format: "text",
        };

        let response = self
            .client
            .post(self.url(TRANSLATE_PATH))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: DataEnvelope<TranslationsData> = handle_response(response).await?;

        Ok(envelope
            .data
            .translations
            .into_iter()
            .map(|t| ProviderTranslation {
                detected_source: t.detected_source_language.unwrap_or_default(),
                text: t.translated_text,
            })
            .collect())
    }

    async fn supported_languages(
        &self,
        display_language: &LanguageTag,
    ) -> BabelResult<Vec<SupportedLanguage>> {
        debug!("Google languages: display names in {}", display_language);

        let response = self
            .client
            .get(self.url(LANGUAGES_PATH))
            .query(&[("key", self.api_key.as_str()), ("target", display_language.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: DataEnvelope<LanguagesData> = handle_response(response).await?;

        Ok(envelope
            .data
            .languages
            .into_iter()
            .map(|l| SupportedLanguage {
                name: l.name.unwrap_or_else(|| l.language.clone()),
                tag: l.language,
            })
            .collect())
    }
}

fn transport_error(err: reqwest::Error) -> BabelError {
    if err.is_timeout() {
        BabelError::provider("Translation provider timed out")
    } else {
        BabelError::provider(format!("Translation provider request failed: {}", err))
    }
}

async fn handle_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> BabelResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_http_error(status, &body));
    }

    response
        .json()
        .await
        .map_err(|e| BabelError::provider(format!("Unexpected provider response: {}", e)))
}

/// Surfaces the provider's own message when the body has Google's error shape.
fn map_http_error(status: StatusCode, body: &str) -> BabelError {
    match serde_json::from_str::<GoogleErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            BabelError::Provider(envelope.error.message)
        }
        _ if body.trim().is_empty() => BabelError::Provider(format!("Provider returned HTTP {}", status)),
        _ => BabelError::Provider(format!("Provider returned HTTP {}: {}", status, body.trim())),
    }
}
