use axum::Json;
use utoipa::OpenApi;

use crate::envelope::Envelope;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "parrot API",
        version = "1.0.0",
        description = "An in-memory store that echoes back whatever payload was posted"
    ),
    paths(
        handlers::health::health_handler,
        handlers::post::post_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(Envelope)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "resources", description = "Resource store operations")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json handler - Serve the OpenAPI document
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
