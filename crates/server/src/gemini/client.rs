//! Gemini API client for image generation.
//!
//! Provides the single gateway call the app needs: composite a message-card
//! image onto a product mockup.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use mockup_studio_core::ImageData;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{
    Content, GenerateRequest, GenerateResponse, GenerationConfig, InlineData, Part,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Instruction sent with the two images. The first inline part is the
/// product mockup (green-screen placeholder), the second is the card.
const COMPOSITE_PROMPT: &str = "The first image is a product mockup containing a solid green \
     placeholder area. The second image is a message card. Replace the green area with the \
     message card, matching the mockup's perspective, lighting, and shadows so the card looks \
     physically present in the scene. Return only the final image.";

/// Gemini API client.
///
/// Cheaply cloneable; holds a configured `reqwest::Client` with the API key
/// installed as a default header.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini API configuration containing API key and model
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Composite a message card onto a product mockup.
    ///
    /// Sends both images as inline base64 parts with a fixed compositing
    /// prompt and returns the first image part of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns an error
    /// response, or the response contains no image.
    #[instrument(
        skip(self, mockup, card),
        fields(
            model = %self.inner.model,
            mockup_bytes = mockup.len(),
            card_bytes = card.len(),
        )
    )]
    pub async fn generate_composite(
        &self,
        mockup: &ImageData,
        card: &ImageData,
    ) -> Result<ImageData, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData(inline(mockup)),
                    Part::InlineData(inline(card)),
                    Part::Text(COMPOSITE_PROMPT.to_string()),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            }),
        };

        let url = format!(
            "{GEMINI_API_BASE}/{model}:generateContent",
            model = self.inner.model
        );

        let response = self.inner.client.post(url).json(&request).send().await?;

        let parsed = Self::handle_response(response).await?;

        let Some(image) = parsed.first_image() else {
            return Err(GeminiError::MissingImage(parsed.first_text()));
        };

        let bytes = STANDARD
            .decode(&image.data)
            .map_err(|e| GeminiError::Parse(format!("invalid base64 in response: {e}")))?;

        Ok(ImageData::new(bytes, image.mime_type.clone()))
    }

    /// Handle a response, surfacing API error bodies on non-success status.
    async fn handle_response(
        response: reqwest::Response,
    ) -> Result<GenerateResponse, GeminiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_error_body(status, &body))
        }
    }
}

/// Build an inline-data part from an image payload.
fn inline(image: &ImageData) -> InlineData {
    InlineData {
        mime_type: image.mime_type().to_string(),
        data: image.base64(),
    }
}

/// Turn an error status and body into a `GeminiError`, preserving the API's
/// own message when the body parses.
fn parse_error_body(status: reqwest::StatusCode, body: &str) -> GeminiError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => GeminiError::Api {
            status: if parsed.error.status.is_empty() {
                status.to_string()
            } else {
                parsed.error.status
            },
            message: parsed.error.message,
        },
        Err(_) => GeminiError::Api {
            status: status.to_string(),
            message: if body.is_empty() {
                "empty error response".to_string()
            } else {
                body.to_string()
            },
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_structured() {
        let body = r#"{"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = parse_error_body(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, "RESOURCE_EXHAUSTED");
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_body_unstructured() {
        let err = parse_error_body(reqwest::StatusCode::BAD_GATEWAY, "upstream blew up");
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, "502 Bad Gateway");
                assert_eq!(message, "upstream blew up");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_inline_part_carries_base64() {
        let image = ImageData::new(b"ABC".to_vec(), "image/png");
        let part = inline(&image);
        assert_eq!(part.mime_type, "image/png");
        assert_eq!(part.data, "QUJD");
    }
}
