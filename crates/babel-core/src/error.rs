//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Babel.
///
/// Request-input errors carry the exact human-readable text returned to
/// clients. Cache errors exist so the cache layer can report failures, but the
/// translation pipeline never lets them reach a response.
#[derive(Error, Debug)]
pub enum BabelError {
    // ============ Request Errors ============
    /// The request body could not be decoded.
    #[error("Invalid request payload")]
    InvalidRequest,

    /// A decoded request failed validation.
    #[error("{0}")]
    Validation(String),

    /// A language identifier could not be parsed.
    #[error(
        "Could not parse the target language '{input}'. Verify that it is an available option and formatted correctly (ex. 'en' for English)"
    )]
    InvalidLanguage { input: String },

    // ============ Provider Errors ============
    /// The translation provider rejected or failed a translation.
    #[error("{0}")]
    Provider(String),

    /// The translation provider answered with no translations.
    #[error("Translation provider returned no results")]
    EmptyProviderResponse,

    /// The translation provider failed to list its languages.
    #[error("Failed to get supported languages: {0}")]
    SupportedLanguages(String),

    // ============ Infrastructure Errors ============
    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BabelError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest
            | Self::Validation(_)
            | Self::InvalidLanguage { .. }
            | Self::Provider(_)
            | Self::EmptyProviderResponse => 400,
            Self::Timeout(_) => 503,
            Self::SupportedLanguages(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidLanguage { .. } => "INVALID_LANGUAGE",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::EmptyProviderResponse => "EMPTY_PROVIDER_RESPONSE",
            Self::SupportedLanguages(_) => "SUPPORTED_LANGUAGES_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid language error for the given input.
    #[must_use]
    pub fn invalid_language<T: Into<String>>(input: T) -> Self {
        Self::InvalidLanguage {
            input: input.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a provider error.
    #[must_use]
    pub fn provider<T: Into<String>>(message: T) -> Self {
        Self::Provider(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest | Self::Validation(_) | Self::InvalidLanguage { .. }
        )
    }
}

impl From<serde_json::Error> for BabelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// JSON error envelope shared by every failing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Creates a new error response from a `BabelError`.
    #[must_use]
    pub fn from_error(error: &BabelError) -> Self {
        Self::new(error.to_string())
    }
}

impl From<&BabelError> for ErrorResponse {
    fn from(error: &BabelError) -> Self {
        Self::from_error(error)
    }
}
