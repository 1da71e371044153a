//! Business logic services for the application layer.

pub mod shorturl_service;

pub use shorturl_service::ShortUrlService;
