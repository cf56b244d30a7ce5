use crate::error::{ApiError, ErrorResponse};
use crate::models::{Album, IndentedJson};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// GET /albums/{id} handler - Retrieve an album
///
/// Returns the first album, in insertion order, whose id equals the path
/// segment verbatim.
#[utoipa::path(
    get,
    path = routes::ALBUM_ITEM,
    params(
        ("id" = String, Path, description = "Album id")
    ),
    responses(
        (status = 200, description = "Album found", body = Album),
        (status = 404, description = "Album not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    match state.albums.get(&id).await? {
        Some(album) => {
            tracing::debug!("Retrieved album with id: {}", id);
            Ok((StatusCode::OK, IndentedJson(album)))
        }
        None => Err(ApiError::AlbumNotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::create_handler;
    use crate::handlers::test_support::{get_request, post_json, read_json, FailingStore};
    use crate::models::seed_albums;
    use axum::{routing::get, routing::post, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app(state: AppState) -> Router {
        Router::new()
            .route(routes::ALBUMS, post(create_handler))
            .route(routes::ALBUM_ITEM, get(get_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_get_every_seeded_album() {
        let app = setup_test_app(AppState::seeded());

        for expected in seed_albums() {
            let response = app
                .clone()
                .oneshot(get_request(&format!("/albums/{}", expected.id)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let album: Album = read_json(response).await;
            assert_eq!(album, expected);
        }
    }

    #[tokio::test]
    async fn test_get_jeru() {
        let app = setup_test_app(AppState::seeded());

        let response = app.oneshot(get_request("/albums/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let album: Album = read_json(response).await;
        assert_eq!(album, Album::new("2", "Jeru", "Gerry Mulligan", 17.99));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = setup_test_app(AppState::seeded());

        let response = app.oneshot(get_request("/albums/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "album not found" }));
    }

    #[tokio::test]
    async fn test_get_created_album() {
        let app = setup_test_app(AppState::seeded());

        let response = app
            .clone()
            .oneshot(post_json(
                "/albums",
                r#"{"id":"4","title":"X","artist":"Y","price":9.99}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_request("/albums/4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let album: Album = read_json(response).await;
        assert_eq!(album, Album::new("4", "X", "Y", 9.99));
    }

    #[tokio::test]
    async fn test_get_duplicate_id_returns_first() {
        let app = setup_test_app(AppState::seeded());

        let response = app
            .clone()
            .oneshot(post_json(
                "/albums",
                r#"{"id":"1","title":"Giant Steps","artist":"John Coltrane","price":12.5}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let album: Album = read_json(app.oneshot(get_request("/albums/1")).await.unwrap()).await;
        assert_eq!(album.title, "Blue Train");
    }

    #[tokio::test]
    async fn test_get_store_error() {
        let app = setup_test_app(AppState::new(Arc::new(FailingStore)));

        let response = app.oneshot(get_request("/albums/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
