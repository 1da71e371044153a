//! Application layer services implementing business logic.
//!
//! Services consume the repository and resolver traits and provide a small
//! API for HTTP handlers.
//!
//! - [`services::shorturl_service::ShortUrlService`] - Shortening and expansion

pub mod services;
