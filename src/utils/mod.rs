//! Utility functions for code generation, URL validation, and store errors.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_validator`] - Syntactic web URL validation and `Location` rendering
//! - [`db_error`] - Unique-violation classification for SQLx errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
