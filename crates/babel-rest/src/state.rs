//! Application state for Axum handlers.

use babel_service::TranslationService;
use shaku::HasComponent;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<dyn TranslationService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(translation_service: Arc<dyn TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn TranslationService>,
    {
        Self::new(module.resolve())
    }
}
