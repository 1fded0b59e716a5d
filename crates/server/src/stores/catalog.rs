//! Product catalog store.

use thiserror::Error;

use mockup_studio_core::{ImageData, MockupId, ProductId};

use crate::models::{Mockup, Product};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Ordered, in-memory product catalog.
///
/// Products are kept most-recent-first; each product's mockups are kept in
/// upload order. Deletions are idempotent: removing something that is
/// already gone is a no-op, not an error.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, most-recent-first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a product with a fresh ID and no mockups, prepending it so the
    /// newest product lists first.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the trimmed name is empty.
    /// (Missing-upload validation happens at the multipart boundary, before
    /// the store is reached.)
    pub fn add_product(
        &mut self,
        name: &str,
        preview: ImageData,
    ) -> Result<&Product, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation(
                "product name must not be empty".to_string(),
            ));
        }

        self.products.insert(0, Product::new(name.to_owned(), preview));
        Ok(self.products.first().expect("just inserted"))
    }

    /// Remove a product and all its mockups.
    ///
    /// Returns whether anything was removed; removing an unknown ID is a
    /// no-op.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Append one mockup per image, in input order, to the given product.
    ///
    /// Returns the number of mockups appended: zero for an empty batch or
    /// an unknown product (both no-ops). Callers decode the whole upload
    /// batch before calling, so a bad file never leaves a partial append.
    pub fn add_mockups(&mut self, product_id: ProductId, images: Vec<ImageData>) -> usize {
        if images.is_empty() {
            return 0;
        }
        let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) else {
            return 0;
        };

        let added = images.len();
        product.mockups.extend(images.into_iter().map(Mockup::new));
        added
    }

    /// Remove one mockup from one product.
    ///
    /// Returns whether anything was removed; an unknown product or mockup
    /// ID is a no-op.
    pub fn delete_mockup(&mut self, product_id: ProductId, mockup_id: MockupId) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) else {
            return false;
        };
        let before = product.mockups.len();
        product.mockups.retain(|m| m.id != mockup_id);
        product.mockups.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png() -> ImageData {
        ImageData::new(vec![0x89, b'P', b'N', b'G'], "image/png")
    }

    #[test]
    fn test_add_product_prepends() {
        let mut catalog = CatalogStore::new();
        catalog.add_product("Mug", png()).unwrap();
        catalog.add_product("Candle", png()).unwrap();

        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.products()[0].name, "Candle");
        assert_eq!(catalog.products()[1].name, "Mug");
    }

    #[test]
    fn test_add_product_trims_name() {
        let mut catalog = CatalogStore::new();
        let product = catalog.add_product("  Mug  ", png()).unwrap();
        assert_eq!(product.name, "Mug");
        assert!(product.mockups.is_empty());
    }

    #[test]
    fn test_add_product_empty_name_rejected() {
        let mut catalog = CatalogStore::new();
        for name in ["", "   "] {
            let err = catalog.add_product(name, png()).unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)));
        }
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_product_ids_unique() {
        let mut catalog = CatalogStore::new();
        catalog.add_product("A", png()).unwrap();
        catalog.add_product("B", png()).unwrap();
        assert_ne!(catalog.products()[0].id, catalog.products()[1].id);
    }

    #[test]
    fn test_delete_product_idempotent() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add_product("Mug", png()).unwrap().id;

        assert!(catalog.delete_product(id));
        assert!(catalog.products().is_empty());
        // Second delete is a no-op, not an error
        assert!(!catalog.delete_product(id));
    }

    #[test]
    fn test_add_mockups_appends_in_order() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add_product("Mug", png()).unwrap().id;

        let batch = vec![
            ImageData::new(b"first".to_vec(), "image/png"),
            ImageData::new(b"second".to_vec(), "image/png"),
        ];
        assert_eq!(catalog.add_mockups(id, batch), 2);

        let more = vec![ImageData::new(b"third".to_vec(), "image/jpeg")];
        assert_eq!(catalog.add_mockups(id, more), 1);

        let mockups = &catalog.product(id).unwrap().mockups;
        let bytes: Vec<&[u8]> = mockups.iter().map(|m| m.image.as_bytes()).collect();
        assert_eq!(bytes, vec![&b"first"[..], &b"second"[..], &b"third"[..]]);
    }

    #[test]
    fn test_add_mockups_unknown_product_noop() {
        let mut catalog = CatalogStore::new();
        let added = catalog.add_mockups(ProductId::new(), vec![png()]);
        assert_eq!(added, 0);
    }

    #[test]
    fn test_add_mockups_empty_batch_noop() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add_product("Mug", png()).unwrap().id;
        assert_eq!(catalog.add_mockups(id, Vec::new()), 0);
        assert!(catalog.product(id).unwrap().mockups.is_empty());
    }

    #[test]
    fn test_delete_mockup() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add_product("Mug", png()).unwrap().id;
        catalog.add_mockups(id, vec![png(), png()]);

        let mockup_id = catalog.product(id).unwrap().mockups[0].id;
        assert!(catalog.delete_mockup(id, mockup_id));
        assert_eq!(catalog.product(id).unwrap().mockups.len(), 1);

        // Idempotent
        assert!(!catalog.delete_mockup(id, mockup_id));
        // Unknown product is a no-op
        assert!(!catalog.delete_mockup(ProductId::new(), mockup_id));
    }

    #[test]
    fn test_delete_product_removes_mockups_with_it() {
        let mut catalog = CatalogStore::new();
        let id = catalog.add_product("Mug", png()).unwrap().id;
        catalog.add_mockups(id, vec![png()]);

        catalog.delete_product(id);
        assert!(catalog.product(id).is_none());
    }
}
