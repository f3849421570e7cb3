//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! The cache is best-effort: callers treat every failure as a miss.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

use std::time::Duration;

pub use cache_interface::{CacheExt, CacheInterface, CacheLookup};
pub use redis_cache::{RedisCacheService, DEFAULT_OPERATION_TIMEOUT};

/// Lifetime of a cached translation (15 days).
pub const TRANSLATION_TTL: Duration = Duration::from_secs(15 * 24 * 60 * 60);
