//! End-to-end API tests for Mockup Studio.
//!
//! The tests in `tests/` drive the real router in-process with
//! `tower::ServiceExt::oneshot`, replacing the Gemini gateway with a
//! scripted stub so no network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mockup-studio-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use mockup_studio_core::ImageData;
use mockup_studio_server::config::{AdminCredentials, GeminiConfig, ServerConfig};
use mockup_studio_server::gemini::GeminiError;
use mockup_studio_server::services::ImageGenerator;
use mockup_studio_server::state::AppState;

/// Admin password every test context is configured with.
pub const TEST_ADMIN_PASSWORD: &str = "password123";

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Scripted gateway stub.
///
/// Echoes `generated:` + the mockup bytes for each call, or fails the call
/// with the given global index. The call counter spans the context's whole
/// lifetime, so a second batch continues where the first left off.
pub struct ScriptedGenerator {
    calls: AtomicUsize,
    fail_on: Option<usize>,
}

impl ScriptedGenerator {
    #[must_use]
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: None,
        }
    }

    #[must_use]
    pub fn failing_on(index: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: Some(index),
        }
    }

    /// Total gateway calls issued so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        mockup: &ImageData,
        _card: &ImageData,
    ) -> Result<ImageData, GeminiError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.fail_on == Some(index) {
            return Err(GeminiError::Api {
                status: "RESOURCE_EXHAUSTED".to_string(),
                message: "quota exceeded".to_string(),
            });
        }

        let mut bytes = b"generated:".to_vec();
        bytes.extend_from_slice(mockup.as_bytes());
        Ok(ImageData::new(bytes, "image/png"))
    }
}

/// An app instance wired to a scripted gateway.
pub struct TestContext {
    pub app: Router,
    pub generator: Arc<ScriptedGenerator>,
}

impl TestContext {
    /// Context whose gateway always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(ScriptedGenerator::succeeding())
    }

    /// Context whose gateway fails the call with the given global index.
    #[must_use]
    pub fn failing_on(index: usize) -> Self {
        Self::with_generator(ScriptedGenerator::failing_on(index))
    }

    fn with_generator(generator: ScriptedGenerator) -> Self {
        let generator = Arc::new(generator);
        let state = AppState::new(test_config(), generator.clone());
        Self {
            app: mockup_studio_server::app(state),
            generator,
        }
    }

    /// Send one request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        admin: AdminCredentials {
            username: "admin".to_string(),
            password: SecretString::from(TEST_ADMIN_PASSWORD),
        },
        seed_user: None,
        static_dir: None,
        gemini: GeminiConfig {
            api_key: SecretString::from("AIzaTestKeyNotUsed"),
            model: "gemini-2.5-flash-image-preview".to_string(),
        },
    }
}

// ============================================================================
// Request Builders
// ============================================================================

/// One part of a multipart form body.
pub enum MultipartPart<'a> {
    /// A plain text field.
    Text { name: &'a str, value: &'a str },
    /// A file field with a content type.
    File {
        name: &'a str,
        filename: &'a str,
        mime_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Build a `multipart/form-data` body using [`BOUNDARY`].
#[must_use]
pub fn multipart_body(parts: &[MultipartPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            MultipartPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            MultipartPart::File {
                name,
                filename,
                mime_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Build a GET request.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a DELETE request.
#[must_use]
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a POST request with a JSON body.
#[must_use]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a POST request with a multipart body built by [`multipart_body`].
#[must_use]
pub fn post_multipart(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Decode the base64 payload of a `data:` URL.
#[must_use]
pub fn decode_data_url(url: &str) -> Vec<u8> {
    use base64::Engine as _;
    let encoded = url.split(',').nth(1).expect("data URL has a payload");
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("valid base64")
}
