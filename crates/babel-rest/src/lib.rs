//! # Babel REST
//!
//! REST API layer using Axum for the Babel translation service.
//! Provides the translation and language-list endpoints plus health checks
//! and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
