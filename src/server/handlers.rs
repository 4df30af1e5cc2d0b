//! Request handlers.
//!
//! Every handler is total: it ignores headers and body and always produces
//! the same response for the same method and path.

use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::routes::trailing_slash_redirect;

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Body of `GET /api/v1/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

pub const HEALTH_OK: HealthStatus = HealthStatus { status: "ok" };

pub const API_MESSAGE: ApiMessage = ApiMessage {
    message: "Trip Plan API",
};

/// Body returned for unmatched paths.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// GET /health — liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HEALTH_OK)
}

/// GET /api/v1/ — API root.
pub async fn api_root() -> Json<ApiMessage> {
    Json(API_MESSAGE)
}

/// Fallback for every request no route matched.
///
/// A GET or HEAD whose path is one trailing slash away from a registered
/// route is redirected to it with a 301. Routes only accept GET and HEAD, so
/// any other method is never redirected. Everything else is a plain-text 404.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let redirectable = method == Method::GET || method == Method::HEAD;
    if let Some(target) = trailing_slash_redirect(uri.path()).filter(|_| redirectable) {
        let location = match uri.query() {
            Some(query) => format!("{target}?{query}"),
            None => target.to_string(),
        };
        tracing::debug!(%method, from = %uri.path(), to = %location, "redirecting trailing slash");
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
    }

    tracing::debug!(%method, path = %uri.path(), "no route matched");
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
