//! Translation service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `translation_service.rs`).

pub mod translation_service_impl;

pub use translation_service_impl::{TranslationServiceImpl, MISSING_TARGET_MESSAGE};
