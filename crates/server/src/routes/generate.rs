//! Generation route handlers.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::instrument;

use mockup_studio_core::{ImageData, ProductId};

use crate::error::AppError;
use crate::services::generation::generate_batch;
use crate::services::upload::{self, UploadError};
use crate::state::AppState;
use crate::stores::GenerationState;

/// Response for a successful generation batch.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Generated images as data URLs, in mockup order.
    pub images: Vec<String>,
}

/// Generation session state as the frontend polls it.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionResponse {
    Idle,
    Generating,
    Succeeded { images: Vec<String> },
    Failed { error: String },
}

impl From<&GenerationState> for SessionResponse {
    fn from(state: &GenerationState) -> Self {
        match state {
            GenerationState::Idle => Self::Idle,
            GenerationState::Generating => Self::Generating,
            GenerationState::Succeeded(images) => Self::Succeeded {
                images: images.iter().map(ImageData::data_url).collect(),
            },
            GenerationState::Failed(message) => Self::Failed {
                error: message.clone(),
            },
        }
    }
}

/// Run a generation batch: multipart form with a `product_id` text part and
/// a `card` image part.
///
/// Issues one gateway call per mockup of the selected product, all
/// concurrently. All-or-nothing: any failure yields an error and zero
/// results. Starting a new batch clears the previous session outcome.
#[instrument(skip(state, multipart))]
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut product_id: Option<ProductId> = None;
    let mut card: Option<ImageData> = None;

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        match field.name() {
            Some("product_id") => {
                let text = field.text().await.map_err(UploadError::from)?;
                let id = text
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid product id: {text}")))?;
                product_id = Some(id);
            }
            Some("card") => card = Some(upload::image_from_field(field).await?),
            _ => {}
        }
    }

    // Validate before the state machine starts; a rejected request leaves
    // the previous session outcome intact.
    let product_id = product_id.ok_or(UploadError::MissingField("product_id"))?;
    let card = card.ok_or(UploadError::MissingField("card"))?;

    let mockups: Vec<ImageData> = {
        let catalog = state.catalog().read().await;
        let product = catalog
            .product(product_id)
            .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;
        product.mockups.iter().map(|m| m.image.clone()).collect()
    };

    state.session().write().await.begin();
    tracing::info!(product_id = %product_id, mockups = mockups.len(), "Generation started");

    match generate_batch(state.generator(), &mockups, &card).await {
        Ok(images) => {
            let urls = images.iter().map(ImageData::data_url).collect();
            state.session().write().await.succeed(images);
            tracing::info!(product_id = %product_id, "Generation succeeded");
            Ok(Json(GenerateResponse { images: urls }))
        }
        Err(e) => {
            state.session().write().await.fail(e.to_string());
            Err(AppError::Generation(e))
        }
    }
}

/// Current generation session state.
pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session().read().await;
    Json(SessionResponse::from(session.state()))
}
