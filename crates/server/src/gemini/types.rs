//! Types for the Gemini API.
//!
//! These types match the `generateContent` REST format for multimodal
//! requests with inline image data.

use serde::{Deserialize, Serialize};

/// Request body for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Request contents (a single turn for this app).
    pub contents: Vec<Content>,
    /// Generation options.
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Generation options.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Which modalities the model may respond with.
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
}

/// A content turn: an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single part of a content turn - text or inline image data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Part {
    /// Plain text.
    #[serde(rename = "text")]
    Text(String),
    /// Base64-encoded image bytes.
    #[serde(rename = "inline_data", alias = "inlineData")]
    InlineData(InlineData),
}

/// Base64-encoded media payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    /// MIME type of the payload (e.g. `image/png`).
    #[serde(rename = "mime_type", alias = "mimeType")]
    pub mime_type: String,
    /// Base64 body without a data-URL wrapper.
    pub data: String,
}

/// Response body from the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Ranked response candidates; the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The candidate's content, absent when generation was blocked.
    pub content: Option<Content>,
}

impl GenerateResponse {
    /// First inline-image part across the first candidate's parts.
    #[must_use]
    pub fn first_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| match part {
                Part::InlineData(data) => Some(data),
                Part::Text(_) => None,
            })
    }

    /// Concatenated text parts of the first candidate, if any.
    ///
    /// Used for error reporting when the model answers with prose instead
    /// of an image.
    #[must_use]
    pub fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: Vec<&str> = parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(t) => Some(t.as_str()),
                Part::InlineData(_) => None,
            })
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text.join(" "))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData(InlineData {
                        mime_type: "image/png".to_string(),
                        data: "QUJD".to_string(),
                    }),
                    Part::Text("compose".to_string()),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "compose");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn test_response_first_image_camel_case() {
        // The API responds with camelCase field names
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let image = response.first_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "QUJD");
    }

    #[test]
    fn test_response_text_only() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "I cannot do that"}]}
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_image().is_none());
        assert_eq!(response.first_text().unwrap(), "I cannot do that");
    }

    #[test]
    fn test_response_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.first_image().is_none());
        assert!(response.first_text().is_none());
    }
}
