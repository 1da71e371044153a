//! Handler for short URL expansion.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::location_for;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Responds `302 Found` with `Location` set to the stored URL. ASCII is kept
/// as submitted; non-ASCII characters are percent-encoded.
///
/// # Errors
///
/// Returns 404 `{"error":"Short URL not found"}` if the code was never issued.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.shorturl_service.expand(&short_url).await?;

    let location = HeaderValue::try_from(location_for(&mapping.original_url)).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "short_code": mapping.short_code, "reason": e.to_string() }),
        )
    })?;

    debug!("Redirecting {} -> {}", mapping.short_code, mapping.original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
