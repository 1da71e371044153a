//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory mapping stores
//! - [`dns`] - Hostname resolution used by URL validation

pub mod dns;
pub mod persistence;
