//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                - Greeting
/// - `POST /shorturl`             - Shorten a URL (JSON or form body)
/// - `GET  /shorturl/{short_url}` - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
