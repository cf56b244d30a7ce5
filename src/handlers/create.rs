use crate::error::{ApiError, ErrorResponse};
use crate::models::{Album, IndentedJson};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /albums handler - Add an album to the catalog
///
/// The album is appended as given: the caller supplies the id and duplicates
/// are accepted. The body is decoded as JSON whatever its content type. A body
/// that does not decode is rejected with 400 and nothing is stored.
#[utoipa::path(
    post,
    path = routes::ALBUMS,
    request_body = Album,
    responses(
        (status = 201, description = "Album created", body = Album),
        (status = 400, description = "Body is not a valid album", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    let Json(album) = Json::<Album>::from_bytes(&body).inspect_err(|rejection| {
        tracing::warn!("Rejected album body: {}", rejection.body_text());
    })?;

    state.albums.append(album.clone()).await?;

    tracing::info!("Created album with id: {}", album.id);
    Ok((StatusCode::CREATED, IndentedJson(album)))
}
