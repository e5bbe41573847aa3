pub mod health;
pub mod post;
pub mod get;

pub use health::health_handler;

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::Method,
    response::Response,
};

/// Catch-all handler for `/{resource}/{id}` paths, dispatched on method.
pub async fn resource_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    let method = request.method().clone();

    if method == Method::POST {
        post::post_handler(state, request).await
    } else if method == Method::GET {
        get::get_handler(state, request).await
    } else {
        tracing::debug!(%method, path = %request.uri().path(), "Rejected resource method");
        Err(ApiError::MethodNotAllowed)
    }
}
