//! Roster route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use mockup_studio_core::Username;

use crate::error::AppError;
use crate::state::AppState;

/// A roster entry as the frontend sees it. Passwords are never serialized.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: Username,
}

/// User creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// List all usernames, in creation order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let roster = state.roster().read().await;
    Json(
        roster
            .users()
            .iter()
            .map(|u| UserResponse {
                username: u.username.clone(),
            })
            .collect(),
    )
}

/// Create a user account.
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let mut roster = state.roster().write().await;
    let user = roster.add_user(&request.username, &request.password)?;

    tracing::info!(username = %user.username, "User created");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            username: user.username.clone(),
        }),
    ))
}
