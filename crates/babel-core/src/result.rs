//! Result type aliases for Babel.

use crate::BabelError;

/// A specialized `Result` type for Babel operations.
pub type BabelResult<T> = Result<T, BabelError>;
