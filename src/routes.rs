// Route paths, response headers and router assembly

use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api_doc::openapi_handler;
use crate::handlers::{health_handler, resource_handler};
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const OPENAPI: &str = "/openapi.json";
/// Documentation only; resource paths are matched by the fallback handler.
pub const RESOURCE: &str = "/{resource}/{id}";

pub const SERVER_HEADER: &str = concat!(
    "Parrot (",
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Build the application router.
///
/// Every response leaves with `Content-Type: application/json` and the
/// `Server` header, raw payload reads included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, any(health_handler))
        // Other methods on the docs path get the resource route's envelopes
        .route(OPENAPI, get(openapi_handler).fallback(resource_handler))
        .fallback(resource_handler)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            HeaderValue::from_static(SERVER_HEADER),
        ))
        .layer(TraceLayer::new_for_http())
}
