//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                  - Health check
//!
//! # Auth
//! POST   /api/login                               - Validate credentials, return role
//!
//! # Catalog (admin actions)
//! GET    /api/products                            - Product listing
//! POST   /api/products                            - Create product (multipart: name + preview)
//! DELETE /api/products/{id}                       - Delete product (idempotent)
//! POST   /api/products/{id}/mockups               - Upload mockups (multipart, repeated "file")
//! DELETE /api/products/{id}/mockups/{mockup_id}   - Delete mockup (idempotent)
//!
//! # Roster (admin actions)
//! GET    /api/users                               - List usernames
//! POST   /api/users                               - Create user
//!
//! # Generation
//! POST   /api/generate                            - Run a generation batch
//! GET    /api/generate/session                    - Current session state
//! ```

pub mod auth;
pub mod generate;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/login", post(auth::login))
        // Catalog
        .route(
            "/api/products",
            get(products::list).post(products::create),
        )
        .route("/api/products/{id}", axum::routing::delete(products::delete))
        .route("/api/products/{id}/mockups", post(products::add_mockups))
        .route(
            "/api/products/{id}/mockups/{mockup_id}",
            axum::routing::delete(products::delete_mockup),
        )
        // Roster
        .route("/api/users", get(users::list).post(users::create))
        // Generation
        .route("/api/generate", post(generate::generate))
        .route("/api/generate/session", get(generate::session))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}
