//! Repository trait definitions for the domain layer.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL
//! - [`crate::infrastructure::persistence::MemoryUrlMappingRepository`] - in-process
//! - Mock implementations are generated via `mockall` for unit tests

pub mod url_mapping_repository;

pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
