//! Mockup Studio Core - Shared types library.
//!
//! This crate provides common types used across all Mockup Studio components:
//! - `server` - HTTP API serving the single-page frontend
//! - `integration-tests` - End-to-end API tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no stores.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, roles, and
//!   image payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
