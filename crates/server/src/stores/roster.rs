//! User roster store.

use thiserror::Error;

use mockup_studio_core::{Username, UsernameError};

use crate::models::User;

/// Errors that can occur when adding a user.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A required field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The username is reserved for the administrator.
    #[error("username \"{0}\" is reserved")]
    ReservedName(String),

    /// The username is already taken.
    #[error("username \"{0}\" already exists")]
    Duplicate(String),
}

/// Append-only, in-memory user roster.
///
/// Users are listed in creation order. There is no update or delete; an
/// account exists for the process lifetime once created.
#[derive(Debug, Default)]
pub struct RosterStore {
    users: Vec<User>,
}

impl RosterStore {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All users, in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Find a user whose username and password both match exactly.
    #[must_use]
    pub fn find_matching(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username.as_str() == username && u.password == password)
    }

    /// Append a new user.
    ///
    /// Both fields are trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// - `RosterError::Validation` if either trimmed field is empty
    /// - `RosterError::ReservedName` if the username is the reserved
    ///   administrator name (case-insensitive)
    /// - `RosterError::Duplicate` if the username is taken (exact compare)
    pub fn add_user(&mut self, username: &str, password: &str) -> Result<&User, RosterError> {
        let password = password.trim();
        if username.trim().is_empty() || password.is_empty() {
            return Err(RosterError::Validation(
                "username and password must not be empty".to_string(),
            ));
        }

        let username = Username::parse(username).map_err(|e| match e {
            UsernameError::Empty => {
                RosterError::Validation("username and password must not be empty".to_string())
            }
            UsernameError::Reserved(name) => RosterError::ReservedName(name),
        })?;

        if self.users.iter().any(|u| u.username == username) {
            return Err(RosterError::Duplicate(username.into_inner()));
        }

        self.users.push(User {
            username,
            password: password.to_owned(),
        });
        Ok(self.users.last().expect("just pushed"))
    }
}
