//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::services::{AuthService, ImageGenerator};
use crate::stores::{CatalogStore, GenerationSession, RosterStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The stores assume a single writer, so they
/// sit behind `RwLock`s on the multi-threaded runtime. Locks are never held
/// across gateway calls.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    auth: AuthService,
    catalog: RwLock<CatalogStore>,
    roster: RwLock<RosterStore>,
    session: RwLock<GenerationSession>,
    generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    /// Create a new application state with empty stores.
    ///
    /// The roster is seeded with the configured initial account, if any;
    /// an invalid seed is logged and skipped rather than failing startup.
    #[must_use]
    pub fn new(config: ServerConfig, generator: Arc<dyn ImageGenerator>) -> Self {
        let mut roster = RosterStore::new();
        if let Some(seed) = &config.seed_user {
            match roster.add_user(&seed.username, &seed.password) {
                Ok(user) => tracing::info!(username = %user.username, "Seeded roster account"),
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid seed account"),
            }
        }

        let auth = AuthService::new(config.admin.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                auth,
                catalog: RwLock::new(CatalogStore::new()),
                roster: RwLock::new(roster),
                session: RwLock::new(GenerationSession::new()),
                generator,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the product catalog store.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<CatalogStore> {
        &self.inner.catalog
    }

    /// Get a reference to the user roster store.
    #[must_use]
    pub fn roster(&self) -> &RwLock<RosterStore> {
        &self.inner.roster
    }

    /// Get a reference to the generation session.
    #[must_use]
    pub fn session(&self) -> &RwLock<GenerationSession> {
        &self.inner.session
    }

    /// Get a reference to the image-generation gateway.
    #[must_use]
    pub fn generator(&self) -> &dyn ImageGenerator {
        self.inner.generator.as_ref()
    }
}
