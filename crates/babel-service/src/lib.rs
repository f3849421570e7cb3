//! # Babel Service
//!
//! Business logic for the Babel translation service: the Redis-backed
//! translation cache, the upstream translation provider client and the
//! cache-augmented translation pipeline that ties them together.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod provider;
pub mod translation_service;

pub use cache::*;
pub use dto::*;
pub use provider::*;
pub use r#impl::*;
pub use translation_service::*;
