//! URL shortening and expansion service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::{AppError, ConflictTarget};
use crate::infrastructure::dns::{HostResolver, ResolveError};
use crate::utils::code_generator::{generate_code, is_well_formed_code};
use crate::utils::url_validator::{host_to_resolve, parse_web_url};

/// Attempts at finding an unused short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URLs.
///
/// Validates submitted URLs (syntax, then DNS), deduplicates by original
/// URL, and bounds every store operation by `store_timeout` and every host
/// lookup by `dns_timeout`.
pub struct ShortUrlService {
    repository: Arc<dyn UrlMappingRepository>,
    resolver: Arc<dyn HostResolver>,
    store_timeout: Duration,
    dns_timeout: Duration,
}

impl ShortUrlService {
    /// Creates a new service.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        resolver: Arc<dyn HostResolver>,
        store_timeout: Duration,
        dns_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            resolver,
            store_timeout,
            dns_timeout,
        }
    }

    /// Returns the mapping for `original_url`, creating one if needed.
    ///
    /// # Deduplication
    ///
    /// An existing mapping for the exact same string is returned unchanged.
    /// If a concurrent request stores the same URL first, its mapping is
    /// returned instead of a second one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the string is not an absolute
    /// http(s) URL.
    ///
    /// Returns [`AppError::UnresolvableHost`] if the hostname does not resolve
    /// within `dns_timeout`.
    ///
    /// Returns [`AppError::Storage`] if the store fails or times out.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        self.validate(original_url).await?;

        if let Some(existing) = self
            .with_timeout(self.repository.find_by_original_url(original_url))
            .await?
        {
            debug!("Reusing {} for {}", existing.short_code, original_url);
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_mapping = NewUrlMapping {
                original_url: original_url.to_string(),
                short_code: generate_code(),
            };

            match self.with_timeout(self.repository.create(new_mapping)).await {
                Ok(mapping) => {
                    info!("Created {} -> {}", mapping.short_code, mapping.original_url);
                    return Ok(mapping);
                }
                Err(AppError::Conflict {
                    target: ConflictTarget::ShortCode,
                    ..
                }) => {
                    warn!("Short code collision (attempt {attempt}/{MAX_CODE_ATTEMPTS})");
                }
                Err(AppError::Conflict {
                    target: ConflictTarget::OriginalUrl,
                    ..
                }) => {
                    debug!("Concurrent insert for {}, reusing it", original_url);
                    return self
                        .with_timeout(self.repository.find_by_original_url(original_url))
                        .await?
                        .ok_or_else(|| {
                            AppError::internal(
                                "Mapping vanished after conflict",
                                json!({ "original_url": original_url }),
                            )
                        });
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Looks up the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    /// Returns [`AppError::Storage`] if the store fails or times out.
    pub async fn expand(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        if !is_well_formed_code(short_code) {
            return Err(AppError::not_found(short_code));
        }

        self.with_timeout(self.repository.find_by_short_code(short_code))
            .await?
            .ok_or_else(|| AppError::not_found(short_code))
    }

    /// Checks that the mapping store answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.with_timeout(self.repository.ping()).await
    }

    /// Syntax check first, then DNS for domain hosts.
    async fn validate(&self, original_url: &str) -> Result<(), AppError> {
        let url = parse_web_url(original_url).map_err(|e| AppError::invalid_url(e))?;

        if let Some(host) = host_to_resolve(&url) {
            tokio::time::timeout(self.dns_timeout, self.resolver.resolve(host))
                .await
                .unwrap_or(Err(ResolveError::Timeout(self.dns_timeout)))
                .map_err(|e| AppError::unresolvable_host(host, e))?;
        }

        Ok(())
    }

    async fn with_timeout<T>(
        &self,
        operation: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        tokio::time::timeout(self.store_timeout, operation)
            .await
            .map_err(|_| {
                AppError::storage(format!(
                    "store operation timed out after {:?}",
                    self.store_timeout
                ))
            })?
    }
}
