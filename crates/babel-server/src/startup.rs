//! Server startup utilities.

use babel_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Translate:  POST http://{}/translate", addr);
    info!("Languages:  GET  http://{}/list-languages?target=en", addr);
    info!("Health:     http://{}/health", addr);
    info!("API Docs:   http://{}/swagger-ui", addr);
    info!("Cache:      {}", cache_summary(config));
    info!("{}", separator);
}

fn cache_summary(config: &AppConfig) -> String {
    if config.redis.enabled {
        format!(
            "redis at {} (timeout {}ms)",
            config.redis.redacted_url(),
            config.redis.operation_timeout_ms
        )
    } else {
        "disabled".to_string()
    }
}
