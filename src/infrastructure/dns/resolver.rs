//! Resolver trait and the system resolver implementation.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("no addresses found")]
    NoRecords,

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Resolves hostnames to IP addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the name does not resolve in time.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

/// Resolver backed by the operating system (`getaddrinfo`) via Tokio.
///
/// Lookups are not bounded here; callers wrap them in their own timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::NoRecords);
        }

        debug!("Resolved {} to {} address(es)", host, addrs.len());
        Ok(addrs)
    }
}
