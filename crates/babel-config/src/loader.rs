//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use babel_core::{BabelError, BabelResult};
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable holding the provider API key in existing deployments.
pub const LEGACY_API_KEY_VAR: &str = "TRANSLATE_API_KEY";

/// Environment variable holding the listen port in existing deployments.
pub const LEGACY_PORT_VAR: &str = "PORT";

/// Unprefixed environment overrides kept for existing deployments.
#[derive(Debug, Clone, Default)]
pub struct LegacyEnv {
    /// Value of `TRANSLATE_API_KEY`.
    pub api_key: Option<String>,
    /// Value of `PORT`.
    pub port: Option<String>,
}

impl LegacyEnv {
    /// Reads the legacy variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(LEGACY_API_KEY_VAR).ok().filter(|v| !v.is_empty()),
            port: std::env::var(LEGACY_PORT_VAR).ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `BABEL_` prefix (`BABEL_SERVER__PORT`)
    /// 5. `TRANSLATE_API_KEY` and `PORT`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: std::env::var("BABEL_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Creates a loader for the default location (`./config`).
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Overrides the environment name used to pick the environment file.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Loads `.env`, then every layered source, and validates the result.
    pub fn load(&self) -> BabelResult<AppConfig> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        self.load_with(&LegacyEnv::from_env())
    }

    /// Loads configuration using explicit legacy overrides.
    pub fn load_with(&self, legacy: &LegacyEnv) -> BabelResult<AppConfig> {
        info!("Loading configuration for environment: {}", self.environment);

        let mut builder = Config::builder();

        for name in ["default", self.environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("BABEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder = builder
            .set_override_option("provider.api_key", legacy.api_key.clone())
            .map_err(config_error_to_babel_error)?;

        if let Some(port) = &legacy.port {
            let port: u16 = port.parse().map_err(|_| {
                BabelError::Configuration(format!("{} must be a valid port, got '{}'", LEGACY_PORT_VAR, port))
            })?;
            builder = builder
                .set_override("server.port", i64::from(port))
                .map_err(config_error_to_babel_error)?;
        }

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_babel_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            BabelError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }
}

fn config_error_to_babel_error(err: ConfigError) -> BabelError {
    BabelError::Configuration(err.to_string())
}
