use crate::envelope::{self, Envelope};
use crate::error::ApiError;
use crate::path::ResourcePath;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    response::Response,
};

/// POST /{resource}/{id} handler - Store an opaque payload
///
/// A request without any body is acknowledged with 204 and nothing is
/// stored. A body that is announced but turns out empty is a 400.
#[utoipa::path(
    post,
    path = routes::RESOURCE,
    params(
        ("resource" = String, Path, description = "Resource type"),
        ("id" = String, Path, description = "Resource id, may contain further slashes")
    ),
    request_body(content = String, description = "Arbitrary payload, stored verbatim", content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Payload stored", body = Envelope),
        (status = 204, description = "Request carried no body, nothing stored", body = Envelope),
        (status = 400, description = "Bad path or empty body", body = Envelope),
        (status = 500, description = "Reading the request body failed", body = Envelope)
    ),
    tag = "resources"
)]
pub async fn post_handler(state: AppState, request: Request) -> Result<Response, ApiError> {
    let target = ResourcePath::parse(request.uri().path()).ok_or(ApiError::BadPath)?;
    let (parts, body) = request.into_parts();

    if !has_body(&parts.headers, &body) {
        tracing::debug!(
            resource_type = %target.resource_type,
            id = %target.id,
            "POST without body, nothing stored"
        );
        return Ok(envelope::respond(StatusCode::NO_CONTENT, "No content"));
    }

    let payload = axum::body::to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|err| {
            tracing::error!(
                resource_type = %target.resource_type,
                id = %target.id,
                "Failed to read request body: {}",
                err
            );
            ApiError::BodyRead(err)
        })?;

    if payload.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let size = payload.len();
    state.store.put(&target.resource_type, &target.id, payload).await;

    tracing::info!(
        resource_type = %target.resource_type,
        id = %target.id,
        size,
        "Successfully stored payload"
    );
    Ok(envelope::respond(StatusCode::CREATED, "created"))
}

/// A request has a body when it announces one through its framing headers,
/// or when the body stream has anything left to yield.
fn has_body(headers: &HeaderMap, body: &Body) -> bool {
    headers.contains_key(header::CONTENT_LENGTH)
        || headers.contains_key(header::TRANSFER_ENCODING)
        || !body.is_end_stream()
}
