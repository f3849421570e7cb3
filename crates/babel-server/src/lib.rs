//! # Babel Server Library
//!
//! Dependency injection wiring and startup utilities for the Babel
//! translation server.

pub mod di;
pub mod startup;
