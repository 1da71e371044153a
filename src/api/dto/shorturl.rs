//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// Accepted as JSON or as a urlencoded form. `url` is required.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortUrlRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, max = 2048, message = "invalid url"))]
    pub url: String,
}

/// Response for a created or reused mapping.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for ShortUrlResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::url_validator::MAX_URL_LENGTH;
    use chrono::Utc;

    #[test]
    fn test_request_rejects_empty_url() {
        let request = ShortUrlRequest { url: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_rejects_oversized_url() {
        let request = ShortUrlRequest {
            url: format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_missing_url_fails_to_deserialize() {
        let result = serde_json::from_str::<ShortUrlRequest>(r#"{"link":"https://example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_non_string_url_fails_to_deserialize() {
        let result = serde_json::from_str::<ShortUrlRequest>(r#"{"url":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_from_mapping() {
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "abc123".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(ShortUrlResponse::from(mapping)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "original_url": "https://example.com", "short_url": "abc123" })
        );
    }
}
