//! HTTP middleware.

mod error_envelope;
mod logging;

pub use error_envelope::*;
pub use logging::*;
