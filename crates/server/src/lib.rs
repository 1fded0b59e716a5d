//! Mockup Studio server library.
//!
//! This crate provides the API as a library, allowing it to be tested
//! in-process and reused by the binary.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API for the single-page frontend
//! - In-memory stores (catalog, roster, generation session); nothing is
//!   persisted, a restart resets all state
//! - Google Gemini API for image generation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Assemble the application router.
///
/// CORS is permissive so the frontend bundle can be served from another
/// origin during development. Tracing and static-file layers are added by
/// the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
