//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored original URL ↔ short code pair
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
