//! Data Transfer Objects (DTOs).

mod translation_dto;

pub use translation_dto::*;
