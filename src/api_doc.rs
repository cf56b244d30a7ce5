use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::Album;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "album-catalog API",
        version = "1.0.0",
        description = "A small in-memory catalog of record albums"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler
    ),
    components(
        schemas(
            Album,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "albums", description = "Album catalog operations")
    )
)]
pub struct ApiDoc;
