//! Image payload type.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// An uploaded or generated image: raw bytes plus their MIME type.
///
/// The same value serves both purposes the app needs: the original bytes are
/// re-submitted to the generation gateway, and [`ImageData::data_url`]
/// renders an embeddable preview for the frontend. No transform is applied
/// at any point, so the bytes round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImageData {
    /// Create an image payload from raw bytes and a MIME type.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// The raw image bytes, exactly as uploaded or generated.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The MIME type (e.g. `image/png`).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Number of bytes in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The base64 body without the data-URL wrapper, as the generation
    /// gateway expects it.
    #[must_use]
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Render a `data:` URL suitable for an `<img src>` attribute.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64())
    }
}
