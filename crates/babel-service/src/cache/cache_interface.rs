//! Cache interface trait for abstracted caching operations.

use babel_core::{BabelResult, Interface};
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Cache interface for storing and retrieving cached data.
///
/// Values are stored as opaque bytes so the trait stays dyn-compatible;
/// [`CacheExt`] layers typed JSON access on top.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get raw bytes from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired. `Err` is
    /// reserved for operational failures (connection, timeout).
    async fn get_raw(&self, key: &str) -> BabelResult<Option<Vec<u8>>>;

    /// Set raw bytes in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &[u8], ttl: Duration) -> BabelResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Outcome of a typed cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    /// The key held a value of the expected shape.
    Hit(T),
    /// The key was absent, expired, or held no bytes.
    Miss,
    /// The key held bytes that could not be decoded.
    Corrupted(String),
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Look up a typed value, separating absent entries from undecodable ones.
    async fn lookup<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> BabelResult<CacheLookup<T>> {
        let bytes = match self.get_raw(key).await? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Ok(CacheLookup::Miss),
        };

        Ok(match serde_json::from_slice(&bytes) {
            Ok(value) => CacheLookup::Hit(value),
            Err(e) => CacheLookup::Corrupted(e.to_string()),
        })
    }

    /// Serialize a value as JSON and store it.
    ///
    /// A value that cannot be serialized is logged and skipped; only store
    /// failures are returned.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> BabelResult<()> {
        let json = match serde_json::to_vec(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize cache value; skipping write");
                return Ok(());
            }
        };
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
