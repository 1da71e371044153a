//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; request DTOs are checked with
//! validator.

pub mod health;
pub mod hello;
pub mod shorturl;
