use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{create_handler, get_handler, health_handler, list_handler};
use crate::routes;
use crate::state::AppState;

/// Build the HTTP router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ALBUMS, get(list_handler).post(create_handler))
        .route(routes::ALBUM_ITEM, get(get_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// A known path with an unrouted method answers like an unknown path.
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
