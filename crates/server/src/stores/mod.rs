//! In-memory stores.
//!
//! All application state lives here: an ordered product catalog, an
//! append-only user roster, and the current generation session. Nothing is
//! persisted; a restart resets everything.
//!
//! Each store is an owned collection behind explicit add/remove/query
//! methods. Handlers reach them through `tokio::sync::RwLock` in
//! [`crate::state::AppState`], which gives the single-writer discipline the
//! stores assume on a multi-threaded runtime.

pub mod catalog;
pub mod roster;
pub mod session;

pub use catalog::{CatalogError, CatalogStore};
pub use roster::{RosterError, RosterStore};
pub use session::{GenerationSession, GenerationState};
