//! Application error type and its HTTP representation.
//!
//! Every failure that reaches a handler is an [`AppError`]. The
//! [`IntoResponse`] implementation turns it into a JSON body with a top-level
//! `error` string and an optional `details` object.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::conflict_target;

/// Message returned for both malformed and unresolvable URLs.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// Message returned for unknown short codes.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Message returned for store failures.
pub const STORAGE_MESSAGE: &str = "Database error";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

/// Which uniqueness rule a write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictTarget {
    ShortCode,
    OriginalUrl,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body does not match the expected schema.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The submitted string is not an absolute http(s) URL.
    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },

    /// The URL's host did not resolve.
    #[error("invalid url: host {host} did not resolve: {reason}")]
    UnresolvableHost { host: String, reason: String },

    #[error("short code {short_code} not found")]
    NotFound { short_code: String },

    #[error("{target:?} already exists")]
    Conflict { target: ConflictTarget, details: Value },

    /// The mapping store failed or timed out.
    #[error("storage failure: {reason}")]
    Storage { reason: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_url(reason: impl ToString) -> Self {
        Self::InvalidUrl {
            reason: reason.to_string(),
        }
    }

    pub fn unresolvable_host(host: impl Into<String>, reason: impl ToString) -> Self {
        Self::UnresolvableHost {
            host: host.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(short_code: impl Into<String>) -> Self {
        Self::NotFound {
            short_code: short_code.into(),
        }
    }

    pub fn conflict(target: ConflictTarget, details: Value) -> Self {
        Self::Conflict { target, details }
    }

    pub fn storage(reason: impl ToString) -> Self {
        Self::Storage {
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status used when this error reaches the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidUrl { .. } | Self::UnresolvableHost { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Storage { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing body. Server-side failure details stay in the log.
    pub fn to_error_body(&self) -> ErrorBody {
        let (error, details) = match self {
            Self::Validation { message, details } => (message.clone(), details.clone()),
            Self::InvalidUrl { .. } | Self::UnresolvableHost { .. } => {
                (INVALID_URL_MESSAGE.to_string(), Value::Null)
            }
            Self::NotFound { .. } => (NOT_FOUND_MESSAGE.to_string(), Value::Null),
            Self::Conflict { details, .. } => ("Already exists".to_string(), details.clone()),
            Self::Storage { .. } => (STORAGE_MESSAGE.to_string(), Value::Null),
            Self::Internal { message, .. } => (message.clone(), Value::Null),
        };

        ErrorBody { error, details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Storage { .. } | Self::Internal { .. } => tracing::error!(error = %self),
            Self::InvalidUrl { .. } | Self::UnresolvableHost { .. } => {
                tracing::debug!(error = %self, "rejected url")
            }
            _ => {}
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(target) = conflict_target(&e) {
            let constraint = e
                .as_database_error()
                .and_then(|db| db.constraint())
                .map(str::to_owned);
            return AppError::conflict(target, json!({ "constraint": constraint }));
        }

        AppError::storage(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        if errors.field_errors().contains_key("url") {
            return AppError::invalid_url(errors);
        }

        AppError::bad_request(
            "invalid request body",
            json!({ "fields": errors.field_errors() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_variants_share_status_and_message() {
        let malformed = AppError::invalid_url("relative URL without a base");
        let unresolvable = AppError::unresolvable_host("nope.invalid", "no records");

        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(unresolvable.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(malformed.to_error_body().error, "invalid url");
        assert_eq!(unresolvable.to_error_body().error, "invalid url");
    }

    #[test]
    fn test_not_found_body() {
        let err = AppError::not_found("abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_body().error, "Short URL not found");
    }

    #[test]
    fn test_storage_error_hides_reason() {
        let err = AppError::storage("connection refused (os error 111)");
        let body = err.to_error_body();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Database error");
        assert!(body.details.is_null());
    }

    #[test]
    fn test_error_body_omits_null_details() {
        let body = serde_json::to_value(AppError::invalid_url("x").to_error_body()).unwrap();
        assert_eq!(body, json!({ "error": "invalid url" }));
    }

    #[test]
    fn test_validation_body_keeps_details() {
        let err = AppError::bad_request("invalid request body", json!({ "reason": "missing field `url`" }));
        let body = serde_json::to_value(err.to_error_body()).unwrap();

        assert_eq!(body["error"], "invalid request body");
        assert_eq!(body["details"]["reason"], "missing field `url`");
    }

    #[test]
    fn test_non_database_sqlx_error_is_storage() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Storage { .. }));
    }
}
