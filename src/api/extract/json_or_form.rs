//! Body extractor accepting either JSON or a urlencoded form.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Deserializes the request body as JSON or as `application/x-www-form-urlencoded`,
/// chosen by the `Content-Type` header.
///
/// Rejections become [`AppError::Validation`] so that a missing or mistyped
/// field yields a structured 400 body instead of axum's plain-text rejection.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            return Ok(Self(payload));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            return Ok(Self(payload));
        }

        Err(AppError::bad_request(
            "invalid request body",
            json!({
                "reason": "Expected `application/json` or `application/x-www-form-urlencoded`",
                "content_type": content_type,
            }),
        ))
    }
}

fn invalid_body(reason: String) -> AppError {
    AppError::bad_request("invalid request body", json!({ "reason": reason }))
}
