use crate::error::{ApiError, ErrorResponse};
use crate::models::{Album, IndentedJson};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// GET /albums handler - List every album
///
/// Returns the whole catalog in insertion order. No filtering, sorting or
/// pagination.
#[utoipa::path(
    get,
    path = routes::ALBUMS,
    responses(
        (status = 200, description = "All albums in insertion order", body = Vec<Album>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, IndentedJson<Vec<Album>>), ApiError> {
    let albums = state.albums.list().await?;

    tracing::debug!("Listed {} albums", albums.len());
    Ok((StatusCode::OK, IndentedJson(albums)))
}
