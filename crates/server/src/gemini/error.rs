//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status label from the API (e.g. `INVALID_ARGUMENT`).
        status: String,
        /// Error message.
        message: String,
    },

    /// The response contained no image part.
    #[error("no image in response{}", text_suffix(.0))]
    MissingImage(Option<String>),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),
}

fn text_suffix(text: &Option<String>) -> String {
    text.as_ref()
        .map(|t| format!(" (model said: {t})"))
        .unwrap_or_default()
}

/// API error response from Gemini.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// HTTP-style error code.
    #[serde(default)]
    pub code: i32,
    /// Error message.
    pub message: String,
    /// Status label (e.g. `INVALID_ARGUMENT`).
    #[serde(default)]
    pub status: String,
}
