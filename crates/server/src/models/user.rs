//! User model.

use mockup_studio_core::Username;

/// A registered regular-user account.
///
/// Passwords are stored and compared in plaintext; hashing and sessions are
/// explicitly out of scope for this app. Accounts are never mutated or
/// deleted after creation.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique login name.
    pub username: Username,
    /// Login password, stored trimmed.
    pub password: String,
}
