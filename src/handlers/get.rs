use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::path::ResourcePath;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /{resource}/{id} handler - Return a stored payload
///
/// The payload is written back exactly as it was uploaded, without the
/// status envelope.
#[utoipa::path(
    get,
    path = routes::RESOURCE,
    params(
        ("resource" = String, Path, description = "Resource type"),
        ("id" = String, Path, description = "Resource id, may contain further slashes")
    ),
    responses(
        (status = 200, description = "Stored payload, byte for byte", body = String, content_type = "application/json"),
        (status = 400, description = "Bad path", body = Envelope),
        (status = 404, description = "Nothing stored under this resource and id", body = Envelope)
    ),
    tag = "resources"
)]
pub async fn get_handler(state: AppState, request: Request) -> Result<Response, ApiError> {
    let target = ResourcePath::parse(request.uri().path()).ok_or(ApiError::BadPath)?;

    match state.store.get(&target.resource_type, &target.id).await {
        Some(payload) => {
            tracing::info!(
                resource_type = %target.resource_type,
                id = %target.id,
                "Successfully retrieved payload"
            );
            Ok((StatusCode::OK, payload).into_response())
        }
        None => {
            tracing::info!(
                resource_type = %target.resource_type,
                id = %target.id,
                "Payload not found"
            );
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn setup_test_app() -> Router {
        routes::router(AppState::new(Config::default()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, axum::body::Bytes) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let app = setup_test_app();

        let (status, body) = send(&app, "GET", "/issues/25", Body::empty()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(&body[..], br#"{"code":404,"message":"Not found"}"#);
    }

    #[tokio::test]
    async fn test_get_endpoint_returns_raw_payload() {
        let app = setup_test_app();

        let (status, body) = send(&app, "POST", "/issues/25", Body::from("{'a':'b'}")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(&body[..], br#"{"code":201,"message":"created"}"#);

        let (status, body) = send(&app, "GET", "/issues/25", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"{'a':'b'}");
    }

    #[tokio::test]
    async fn test_get_endpoint_after_post_without_body() {
        let app = setup_test_app();

        let (status, _) = send(&app, "POST", "/issues/25", Body::empty()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", "/issues/25", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_endpoint_returns_latest_payload() {
        let app = setup_test_app();
        let uri = format!("/notes/{}", Uuid::new_v4());

        send(&app, "POST", &uri, Body::from("first")).await;
        send(&app, "POST", &uri, Body::from("second")).await;

        let (status, body) = send(&app, "GET", &uri, Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"second");
    }

    #[tokio::test]
    async fn test_get_endpoint_binary_payload() {
        let app = setup_test_app();
        let payload: Vec<u8> = vec![0x00, 0xff, 0x10, 0x80, b'\n'];

        send(&app, "POST", "/blobs/raw", Body::from(payload.clone())).await;

        let (status, body) = send(&app, "GET", "/blobs/raw", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.to_vec(), payload);
    }

    #[tokio::test]
    async fn test_get_endpoint_nested_id() {
        let app = setup_test_app();

        send(&app, "POST", "/issues/25/comments/1", Body::from("nested")).await;

        let (status, body) = send(&app, "GET", "/issues/25/comments/1", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"nested");

        let (status, _) = send(&app, "GET", "/issues/25", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_endpoint_bad_path() {
        let app = setup_test_app();

        for path in ["/", "/issues", "/issues/"] {
            let (status, body) = send(&app, "GET", path, Body::empty()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "path {path}");
            assert_eq!(
                &body[..],
                br#"{"code":400,"message":"Bad path, expected /resources/id"}"#
            );
        }
    }
}
