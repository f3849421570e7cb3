//! # Babel Config
//!
//! Configuration management for the Babel translation service.
//! Supports layered configuration from files, `.env` and environment
//! variables, validated once at startup.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
