//! Mapping store implementations.
//!
//! - [`PgUrlMappingRepository`] - PostgreSQL via SQLx
//! - [`MemoryUrlMappingRepository`] - process-local map, for development and tests

pub mod memory_url_mapping_repository;
pub mod pg_url_mapping_repository;

pub use memory_url_mapping_repository::MemoryUrlMappingRepository;
pub use pg_url_mapping_repository::PgUrlMappingRepository;
