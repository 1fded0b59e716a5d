//! Unified error handling for the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;
use crate::services::{AuthError, UploadError};
use crate::stores::{CatalogError, RosterError};

/// Application-level error type for the API.
///
/// Every error is terminal for the one request that raised it and is
/// surfaced to the client as a message; nothing is retried and prior state
/// stays intact.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog operation rejected the input.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Roster operation rejected the input.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Login failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Uploaded file could not be decoded.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The generation gateway failed.
    #[error("generation failed: {0}")]
    Generation(#[from] GeminiError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_) | Self::Generation(_)) {
            tracing::error!(error = %self, "API request error");
        }

        let status = match &self {
            Self::Catalog(_) | Self::Upload(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Roster(RosterError::Duplicate(_)) => StatusCode::CONFLICT,
            Self::Roster(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
