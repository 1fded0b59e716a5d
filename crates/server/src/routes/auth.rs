//! Login route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use mockup_studio_core::Role;

use crate::error::AppError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: Role,
}

/// Validate credentials and return the granted role.
///
/// No session or token is issued; the frontend keeps the role client-side.
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let roster = state.roster().read().await;
    let role = state
        .auth()
        .authenticate(&roster, &request.username, &request.password)?;

    tracing::info!(?role, "Login succeeded");
    Ok(Json(LoginResponse { role }))
}
