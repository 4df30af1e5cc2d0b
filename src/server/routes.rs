//! Route table for the Trip Plan API server.
//!
//! # Routes
//!
//! - `GET /health`  — Returns `{"status":"ok"}`
//! - `GET /api/v1/` — Returns `{"message":"Trip Plan API"}`
//!
//! Paths are matched exactly. Anything else falls through to
//! [`handlers::not_found`], which redirects trailing-slash variants of the
//! paths above and answers 404 otherwise.

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::ServerConfig;

pub const HEALTH_PATH: &str = "/health";
pub const API_ROOT_PATH: &str = "/api/v1/";

/// Every registered path, in registration order.
pub const ROUTES: [&str; 2] = [HEALTH_PATH, API_ROOT_PATH];

/// Build the axum router with all routes and middleware.
pub fn app_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(API_ROOT_PATH, get(handlers::api_root))
        .fallback(handlers::not_found);

    with_middleware(router, config)
}

/// Wrap `router` in request tracing, panic recovery and, if enabled, CORS.
///
/// Layers only cover routes registered before this call.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    let mut router = router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// The registered route that `path` differs from by one trailing slash, if any.
///
/// `/` is never redirected.
pub fn trailing_slash_redirect(path: &str) -> Option<&'static str> {
    if path.len() <= 1 {
        return None;
    }
    let candidate = match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => format!("{path}/"),
    };
    ROUTES.iter().copied().find(|route| *route == candidate)
}
