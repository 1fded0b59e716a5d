//! Multipart upload decoding.
//!
//! Turns uploaded multipart fields into [`ImageData`] payloads. Reading a
//! field's bytes is the app's decode suspension point; validation is strict
//! so a bad file in a batch fails the whole request before any store is
//! touched (all-or-nothing).

use axum::extract::multipart::{Field, MultipartError};
use thiserror::Error;

use mockup_studio_core::ImageData;

/// Fallback when the client did not send a content type for a file part.
const DEFAULT_MIME: &str = "application/octet-stream";

/// Errors that can occur while decoding uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Reading the multipart stream failed.
    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    /// A required part was not sent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An uploaded file had no bytes.
    #[error("uploaded file \"{0}\" is empty")]
    EmptyFile(String),

    /// An uploaded file is not an image.
    #[error("uploaded file \"{name}\" has unsupported type {mime_type} (expected image/*)")]
    UnsupportedType {
        /// Client-side file name, if sent.
        name: String,
        /// The rejected content type.
        mime_type: String,
    },
}

/// Read one multipart field into an image payload.
///
/// The bytes are kept exactly as uploaded; no transform is applied.
///
/// # Errors
///
/// Returns an error if the field cannot be read, is empty, or does not
/// carry an `image/*` content type.
pub async fn image_from_field(field: Field<'_>) -> Result<ImageData, UploadError> {
    let name = field
        .file_name()
        .or_else(|| field.name())
        .unwrap_or("upload")
        .to_owned();
    let mime_type = field.content_type().unwrap_or(DEFAULT_MIME).to_owned();

    if !mime_type.starts_with("image/") {
        return Err(UploadError::UnsupportedType { name, mime_type });
    }

    let bytes = field.bytes().await?;
    if bytes.is_empty() {
        return Err(UploadError::EmptyFile(name));
    }

    Ok(ImageData::new(bytes.to_vec(), mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field construction requires a live multipart stream, so field-level
    // decoding is covered by the integration tests. The error formatting
    // is checked here.

    #[test]
    fn test_error_messages() {
        let err = UploadError::MissingField("preview");
        assert_eq!(err.to_string(), "missing required field: preview");

        let err = UploadError::EmptyFile("card.png".to_string());
        assert_eq!(err.to_string(), "uploaded file \"card.png\" is empty");

        let err = UploadError::UnsupportedType {
            name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "uploaded file \"notes.txt\" has unsupported type text/plain (expected image/*)"
        );
    }
}
