use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::envelope;

/// Custom error type for API endpoints
///
/// Every variant is recovered at the handler boundary and rendered as a
/// status envelope with the matching HTTP status code.
#[derive(Debug)]
pub enum ApiError {
    /// Path is not of the form `/{resource}/{id}`
    BadPath,
    /// Request announced a body but it was zero bytes long
    EmptyBody,
    /// Reading the request body failed
    BodyRead(axum::Error),
    /// Nothing stored under the requested resource type and id
    NotFound,
    /// Method not supported on the matched route
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadPath => (
                StatusCode::BAD_REQUEST,
                "Bad path, expected /resources/id".to_string(),
            ),
            ApiError::EmptyBody => (StatusCode::BAD_REQUEST, "expected a body".to_string()),
            ApiError::BodyRead(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
        };

        envelope::respond(status, &message)
    }
}

impl From<axum::Error> for ApiError {
    fn from(err: axum::Error) -> Self {
        ApiError::BodyRead(err)
    }
}
