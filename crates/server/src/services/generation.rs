//! Concurrent generation fan-out.
//!
//! One gateway call per mockup of the selected product, all in flight at
//! once, joined all-or-nothing: the first failure fails the batch and no
//! partial results are returned. In-flight siblings are not cancelled,
//! merely no longer awaited.

use async_trait::async_trait;
use futures::future::try_join_all;

use mockup_studio_core::ImageData;

use crate::gemini::{GeminiClient, GeminiError};

/// The image-generation gateway seam.
///
/// [`GeminiClient`] is the production implementation; tests substitute a
/// stub so the fan-out semantics can be exercised without the network.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Composite a message card onto a single mockup.
    async fn generate(
        &self,
        mockup: &ImageData,
        card: &ImageData,
    ) -> Result<ImageData, GeminiError>;
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(
        &self,
        mockup: &ImageData,
        card: &ImageData,
    ) -> Result<ImageData, GeminiError> {
        self.generate_composite(mockup, card).await
    }
}

/// Generate one composite per mockup, concurrently.
///
/// Results come back in mockup order. An empty batch succeeds with an empty
/// result list without touching the gateway.
///
/// # Errors
///
/// Returns the first gateway error; when any call fails, no results are
/// returned at all.
pub async fn generate_batch(
    generator: &dyn ImageGenerator,
    mockups: &[ImageData],
    card: &ImageData,
) -> Result<Vec<ImageData>, GeminiError> {
    try_join_all(mockups.iter().map(|mockup| generator.generate(mockup, card))).await
}
