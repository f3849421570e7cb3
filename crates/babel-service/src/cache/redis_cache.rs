//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use babel_config::RedisConfig;
use babel_core::{with_timeout, BabelError, BabelResult};
use deadpool_redis::{redis::AsyncCommands, Config, Pool, PoolConfig, Runtime};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default upper bound for a single cache operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    /// Upper bound for a single get/set, including pool checkout.
    #[shaku(default = DEFAULT_OPERATION_TIMEOUT)]
    operation_timeout: Duration,
}

impl RedisCacheService {
    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Build the connection pool described by `config`.
    ///
    /// Returns `Ok(None)` when Redis is disabled. Connections are opened
    /// lazily, so an unreachable server is not an error here.
    pub fn create_pool(config: &RedisConfig) -> BabelResult<Option<Arc<Pool>>> {
        if !config.enabled {
            info!("Redis cache disabled; every translation goes to the provider");
            return Ok(None);
        }

        let mut redis_cfg = Config::from_url(&config.url);
        redis_cfg.pool = Some(PoolConfig::new(config.pool_size));
        let pool = redis_cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| BabelError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        info!("Redis cache configured at {}", config.redacted_url());
        Ok(Some(Arc::new(pool)))
    }

    /// Create a cache service from configuration.
    pub fn from_config(config: &RedisConfig) -> BabelResult<Self> {
        Ok(Self {
            pool: Self::create_pool(config)?,
            operation_timeout: config.operation_timeout(),
        })
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> BabelResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                BabelError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(BabelError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> BabelResult<Option<Vec<u8>>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let value = with_timeout(self.operation_timeout, || async {
            let mut conn = self.get_conn().await?;
            conn.get::<_, Option<Vec<u8>>>(key).await.map_err(|e| {
                BabelError::Cache(format!("Failed to get key '{}': {}", key, e))
            })
        })
        .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &[u8], ttl: Duration) -> BabelResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let ttl_secs = ttl.as_secs().max(1);

        with_timeout(self.operation_timeout, || async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                BabelError::Cache(format!("Failed to set key '{}': {}", key, e))
            })
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}
