//! Top-level router combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Landing page
//! - `GET  /health`                    - Health check
//! - `/api/*`                          - JSON API (see [`crate::api::routes`])
//! - `GET  /public/*`                  - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed
//! - **Path normalization** - Trailing slashes trimmed before routing

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served under `/public`; missing files are 404
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
