//! In-process implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::{AppError, ConflictTarget};

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_code: HashMap<String, UrlMapping>,
    code_by_url: HashMap<String, String>,
}

/// Mapping store held in process memory.
///
/// Selected with `DATABASE_URL=memory://`. Data is lost on restart. Applies
/// the same uniqueness rules as the PostgreSQL schema.
#[derive(Default)]
pub struct MemoryUrlMappingRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlMappingRepository for MemoryUrlMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_code.contains_key(&new_mapping.short_code) {
            return Err(AppError::conflict(
                ConflictTarget::ShortCode,
                json!({ "short_code": new_mapping.short_code }),
            ));
        }

        if inner.code_by_url.contains_key(&new_mapping.original_url) {
            return Err(AppError::conflict(
                ConflictTarget::OriginalUrl,
                json!({ "original_url": new_mapping.original_url }),
            ));
        }

        inner.next_id += 1;
        let mapping = UrlMapping::new(
            inner.next_id,
            new_mapping.original_url,
            new_mapping.short_code,
            Utc::now(),
        );

        inner
            .code_by_url
            .insert(mapping.original_url.clone(), mapping.short_code.clone());
        inner
            .by_code
            .insert(mapping.short_code.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.inner.read().await.by_code.get(short_code).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .code_by_url
            .get(original_url)
            .and_then(|code| inner.by_code.get(code))
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
