//! Timeout wrapper for async operations.

use crate::BabelError;
use std::time::Duration;

/// Wraps an async operation with a timeout.
///
/// When the deadline passes the inner future is dropped, which abandons
/// whatever network call it was awaiting.
pub async fn with_timeout<F, Fut, T>(duration: Duration, f: F) -> Result<T, BabelError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, BabelError>>,
{
    tokio::time::timeout(duration, f())
        .await
        .map_err(|_| BabelError::Timeout(format!("Operation timed out after {:?}", duration)))?
}
