//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty or whitespace-only.
    #[error("username cannot be empty")]
    Empty,
    /// The input equals the reserved administrator name.
    #[error("username \"{0}\" is reserved")]
    Reserved(String),
}

/// A registered user's name.
///
/// Usernames are stored trimmed and compared case-sensitively. The
/// administrator name is reserved: it cannot be claimed by a regular
/// account, which keeps the admin login path unambiguous.
///
/// ## Constraints
///
/// - Must be non-empty after trimming surrounding whitespace
/// - Must not equal `admin` (case-insensitive)
///
/// ## Examples
///
/// ```
/// use mockup_studio_core::Username;
///
/// assert!(Username::parse("alice").is_ok());
/// assert!(Username::parse("  bob  ").is_ok()); // stored trimmed
///
/// assert!(Username::parse("").is_err());      // empty
/// assert!(Username::parse("   ").is_err());   // whitespace-only
/// assert!(Username::parse("Admin").is_err()); // reserved
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// The reserved administrator name.
    pub const RESERVED: &'static str = "admin";

    /// Parse a `Username` from a string.
    ///
    /// Surrounding whitespace is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or equals the
    /// reserved administrator name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        if trimmed.eq_ignore_ascii_case(Self::RESERVED) {
            return Err(UsernameError::Reserved(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
