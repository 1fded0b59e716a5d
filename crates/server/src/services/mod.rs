//! Application services.

pub mod auth;
pub mod generation;
pub mod upload;

pub use auth::{AuthError, AuthService};
pub use generation::ImageGenerator;
pub use upload::UploadError;
