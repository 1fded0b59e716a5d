//! Core types for Mockup Studio.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod role;
pub mod username;

pub use id::*;
pub use image::ImageData;
pub use role::Role;
pub use username::{Username, UsernameError};
