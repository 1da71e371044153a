//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ShortUrlService;
use crate::domain::repositories::UrlMappingRepository;
use crate::infrastructure::dns::HostResolver;

/// State cloned into every handler.
///
/// The store and resolver are constructed once at startup and passed in.
#[derive(Clone)]
pub struct AppState {
    pub shorturl_service: Arc<ShortUrlService>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        resolver: Arc<dyn HostResolver>,
        store_timeout: Duration,
        dns_timeout: Duration,
    ) -> Self {
        Self {
            shorturl_service: Arc::new(ShortUrlService::new(
                repository,
                resolver,
                store_timeout,
                dns_timeout,
            )),
        }
    }
}
