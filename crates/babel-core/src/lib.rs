//! # Babel Core
//!
//! Core types and error definitions for the Babel translation service.
//! Every other crate in the workspace builds on the error taxonomy and the
//! language tag value object defined here.

pub mod error;
pub mod language;
pub mod result;
pub mod timeout;
pub mod validation;

pub use error::*;
pub use language::*;
pub use result::*;
pub use timeout::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface, Module, ModuleBuilder};
