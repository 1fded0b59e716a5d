//! Authentication service.
//!
//! One check at login time, no session afterwards: the frontend keeps the
//! returned role for the lifetime of the page.

use secrecy::ExposeSecret;
use thiserror::Error;

use mockup_studio_core::Role;

use crate::config::AdminCredentials;
use crate::stores::RosterStore;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password did not match.
    ///
    /// Deliberately a single variant: an unknown user and a wrong password
    /// are indistinguishable to the caller, so usernames cannot be
    /// enumerated through the login endpoint.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Credential check against the admin account and the user roster.
pub struct AuthService {
    admin: AdminCredentials,
}

impl AuthService {
    /// Create an authentication service for the given admin credentials.
    #[must_use]
    pub const fn new(admin: AdminCredentials) -> Self {
        Self { admin }
    }

    /// Validate a username/password pair and return the granted role.
    ///
    /// The admin account lives outside the roster: it is checked first,
    /// against configuration, and wins regardless of roster contents. All
    /// comparisons are exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when neither the admin
    /// credentials nor any roster entry matches.
    pub fn authenticate(
        &self,
        roster: &RosterStore,
        username: &str,
        password: &str,
    ) -> Result<Role, AuthError> {
        if username == self.admin.username && password == self.admin.password.expose_secret() {
            return Ok(Role::Admin);
        }

        if roster.find_matching(username, password).is_some() {
            return Ok(Role::User);
        }

        Err(AuthError::InvalidCredentials)
    }
}
