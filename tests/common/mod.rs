#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tower_http::normalize_path::NormalizePath;
use shorturl::domain::entities::{NewUrlMapping, UrlMapping};
use shorturl::domain::repositories::UrlMappingRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::dns::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::MemoryUrlMappingRepository;
use shorturl::routes::app_router;
use shorturl::state::AppState;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DNS_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolves every host except those under the reserved `.invalid` TLD.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        if host.ends_with(".invalid") {
            return Err(ResolveError::NoRecords);
        }

        Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
    }
}

/// Store whose every operation fails.
pub struct FailingRepository;

#[async_trait]
impl UrlMappingRepository for FailingRepository {
    async fn create(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_original_url(
        &self,
        _original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::storage("connection refused"))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlMappingRepository>) {
    let repository = Arc::new(MemoryUrlMappingRepository::new());
    let state = AppState::new(
        repository.clone(),
        Arc::new(StubResolver),
        STORE_TIMEOUT,
        DNS_TIMEOUT,
    );

    (state, repository)
}

pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingRepository),
        Arc::new(StubResolver),
        STORE_TIMEOUT,
        DNS_TIMEOUT,
    )
}

pub fn test_app(state: AppState) -> NormalizePath<Router> {
    app_router(state, "public")
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(test_app(state))).unwrap()
}

pub async fn insert_mapping(repository: &MemoryUrlMappingRepository, url: &str, code: &str) {
    repository
        .create(NewUrlMapping {
            original_url: url.to_string(),
            short_code: code.to_string(),
        })
        .await
        .unwrap();
}
