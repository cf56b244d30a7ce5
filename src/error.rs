use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::models::IndentedJson;

pub const ALBUM_NOT_FOUND: &str = "album not found";

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a `{"message": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// No album with the requested id
    AlbumNotFound(String),
    /// Request body could not be decoded into an album
    InvalidBody(JsonRejection),
    /// Repository operation error
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::AlbumNotFound(id) => {
                tracing::info!("Album not found with id: {}", id);
                (StatusCode::NOT_FOUND, ALBUM_NOT_FOUND.to_string())
            }
            // Every decode failure is a client error, whatever the rejection kind.
            ApiError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::Store(err) => {
                tracing::error!("Store error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("store error: {}", err),
                )
            }
        };

        (status, IndentedJson(ErrorResponse { message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
