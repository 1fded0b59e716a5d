//! Catalog route handlers: products and their mockups.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use mockup_studio_core::{ImageData, MockupId, ProductId};

use crate::error::AppError;
use crate::models::Product;
use crate::services::upload::{self, UploadError};
use crate::state::AppState;

/// A product as the frontend sees it: images as data URLs.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub preview_url: String,
    pub mockups: Vec<MockupResponse>,
}

/// A mockup as the frontend sees it.
#[derive(Debug, Serialize)]
pub struct MockupResponse {
    pub id: MockupId,
    pub url: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            preview_url: product.preview.data_url(),
            mockups: product
                .mockups
                .iter()
                .map(|m| MockupResponse {
                    id: m.id,
                    url: m.image.data_url(),
                })
                .collect(),
        }
    }
}

/// Response for a mockup upload batch.
#[derive(Debug, Serialize)]
pub struct AddMockupsResponse {
    /// Number of mockups appended (zero when the product is unknown or the
    /// batch was empty).
    pub added: usize,
}

/// List all products, most-recent-first.
pub async fn list(State(state): State<AppState>) -> Json<Vec<ProductResponse>> {
    let catalog = state.catalog().read().await;
    Json(catalog.products().iter().map(ProductResponse::from).collect())
}

/// Create a product from a multipart form with a `name` text part and a
/// `preview` image part.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let mut name = String::new();
    let mut preview: Option<ImageData> = None;

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        match field.name() {
            Some("name") => name = field.text().await.map_err(UploadError::from)?,
            Some("preview") => preview = Some(upload::image_from_field(field).await?),
            _ => {}
        }
    }

    let preview = preview.ok_or(UploadError::MissingField("preview"))?;

    let mut catalog = state.catalog().write().await;
    let product = catalog.add_product(&name, preview)?;

    tracing::info!(product_id = %product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Delete a product and all its mockups. Idempotent: deleting an unknown
/// product still returns 204.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> StatusCode {
    let removed = state.catalog().write().await.delete_product(id);
    if removed {
        tracing::info!(product_id = %id, "Product deleted");
    }
    StatusCode::NO_CONTENT
}

/// Upload a batch of mockups for a product: repeated `file` image parts.
///
/// The whole batch is decoded before the catalog is touched, so one bad
/// file rejects the batch and appends nothing.
#[instrument(skip(state, multipart))]
pub async fn add_mockups(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    mut multipart: Multipart,
) -> Result<Json<AddMockupsResponse>, AppError> {
    let mut images = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.name() == Some("file") {
            images.push(upload::image_from_field(field).await?);
        }
    }

    let added = state.catalog().write().await.add_mockups(id, images);
    if added > 0 {
        tracing::info!(product_id = %id, added, "Mockups uploaded");
    }
    Ok(Json(AddMockupsResponse { added }))
}

/// Delete one mockup from one product. Idempotent.
#[instrument(skip(state))]
pub async fn delete_mockup(
    State(state): State<AppState>,
    Path((id, mockup_id)): Path<(ProductId, MockupId)>,
) -> StatusCode {
    let removed = state.catalog().write().await.delete_mockup(id, mockup_id);
    if removed {
        tracing::info!(product_id = %id, mockup_id = %mockup_id, "Mockup deleted");
    }
    StatusCode::NO_CONTENT
}
