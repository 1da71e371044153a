mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::entities::NewUrlMapping;
use shorturl::domain::repositories::UrlMappingRepository;
use shorturl::error::{AppError, ConflictTarget};
use shorturl::infrastructure::persistence::PgUrlMappingRepository;

fn new_mapping(url: &str, code: &str) -> NewUrlMapping {
    NewUrlMapping {
        original_url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_create_mapping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let result = repo.create(new_mapping("https://example.com", "abc123")).await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert!(mapping.id > 0);
    assert_eq!(mapping.original_url, "https://example.com");
    assert_eq!(mapping.short_code, "abc123");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_short_code(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));
    repo.create(new_mapping("https://find.example.com", "find01"))
        .await
        .unwrap();

    let found = repo.find_by_short_code("find01").await.unwrap();

    assert!(found.is_some());
    assert_eq!(found.unwrap().original_url, "https://find.example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_short_code_missing(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let found = repo.find_by_short_code("nope").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_original_url(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));
    let created = repo
        .create(new_mapping("https://by-url.example.com", "byurl1"))
        .await
        .unwrap();

    let found = repo
        .find_by_original_url("https://by-url.example.com")
        .await
        .unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_duplicate_short_code_conflict(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));
    repo.create(new_mapping("https://one.example.com", "dup001"))
        .await
        .unwrap();

    let result = repo
        .create(new_mapping("https://two.example.com", "dup001"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict {
            target: ConflictTarget::ShortCode,
            ..
        })
    ));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_duplicate_original_url_conflict(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));
    repo.create(new_mapping("https://same.example.com", "same01"))
        .await
        .unwrap();

    let result = repo
        .create(new_mapping("https://same.example.com", "same02"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict {
            target: ConflictTarget::OriginalUrl,
            ..
        })
    ));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
