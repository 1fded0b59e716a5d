//! Product and mockup models.

use mockup_studio_core::{ImageData, MockupId, ProductId};

/// A catalog product: a name, a preview image, and its uploaded mockups.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID (process lifetime).
    pub id: ProductId,
    /// Display name, stored trimmed.
    pub name: String,
    /// Preview image shown in listings.
    pub preview: ImageData,
    /// Green-screen mockups in upload order.
    pub mockups: Vec<Mockup>,
}

impl Product {
    /// Create a product with a fresh ID and no mockups.
    #[must_use]
    pub fn new(name: String, preview: ImageData) -> Self {
        Self {
            id: ProductId::new(),
            name,
            preview,
            mockups: Vec::new(),
        }
    }
}

/// An uploaded mockup image owned by exactly one product.
///
/// The stored bytes serve both the on-screen preview and re-submission to
/// the generation gateway; nothing is re-encoded in between.
#[derive(Debug, Clone)]
pub struct Mockup {
    /// Unique mockup ID (process lifetime).
    pub id: MockupId,
    /// The uploaded image, byte-for-byte.
    pub image: ImageData,
}

impl Mockup {
    /// Wrap an uploaded image with a fresh ID.
    #[must_use]
    pub fn new(image: ImageData) -> Self {
        Self {
            id: MockupId::new(),
            image,
        }
    }
}
