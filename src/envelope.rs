use axum::{
    body::{Body, Bytes},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

/// Uniform status body returned by every endpoint except a successful
/// resource read.
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct Envelope {
    pub code: u16,
    pub message: String,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    code: u16,
    message: &'a str,
}

/// Encode `{"code": .., "message": ..}` with the fields in that order.
///
/// # Panics
/// Panics if serialization fails, which cannot happen for an integer and a
/// string.
pub fn encode(code: u16, message: &str) -> Bytes {
    let body = serde_json::to_vec(&EnvelopeRef { code, message })
        .expect("status envelope must always serialize");
    Bytes::from(body)
}

/// Build a response whose status and envelope code agree.
pub fn respond(status: StatusCode, message: &str) -> Response {
    let body = encode(status.as_u16(), message);
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
}
