//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorturl::{ShortUrlRequest, ShortUrlResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short code for a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON or urlencoded form:
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com/some/long/path", "short_url": "Xk3_a9Qz" }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// - 400 `{"error":"invalid url"}` if the URL is malformed or its host does not resolve
/// - 400 `{"error":"invalid request body", ...}` if `url` is missing or not a string
/// - 500 `{"error":"Database error"}` if the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let mapping = state.shorturl_service.shorten(&payload.url).await?;

    Ok(Json(mapping.into()))
}
