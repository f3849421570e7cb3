//! REST API controllers.

pub mod health_controller;
pub mod home_controller;
pub mod language_controller;
pub mod translation_controller;

pub use health_controller::*;
pub use home_controller::*;
pub use language_controller::*;
pub use translation_controller::*;
