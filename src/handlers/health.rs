use crate::envelope::{self, Envelope};
use crate::error::ApiError;
use crate::routes;
use axum::{
    http::{Method, StatusCode},
    response::Response,
};

/// /health handler - Liveness check
///
/// Only GET is accepted; any other method, HEAD included, is answered
/// with 405.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = Envelope),
        (status = 405, description = "Method other than GET", body = Envelope)
    ),
    tag = "health"
)]
pub async fn health_handler(method: Method) -> Result<Response, ApiError> {
    if method != Method::GET {
        tracing::debug!(%method, "Rejected health check method");
        return Err(ApiError::MethodNotAllowed);
    }

    tracing::debug!("Health check passed");
    Ok(envelope::respond(StatusCode::OK, "OK"))
}
