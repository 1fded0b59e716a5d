//! Google Gemini client for image generation.
//!
//! The app's one external collaborator: given a product mockup and a
//! message-card image, the model composites the card onto the mockup's
//! green-screen area and returns a new image.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::{ApiErrorResponse, GeminiError};
pub use types::{
    Candidate, Content, GenerateRequest, GenerateResponse, GenerationConfig, InlineData, Part,
};
