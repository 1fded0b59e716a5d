//! Session role.

use serde::{Deserialize, Serialize};

/// Role granted to a session after a successful login.
///
/// Admins manage the product catalog and the user roster; regular users
/// generate images from existing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Whether this role may perform catalog and roster mutations.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
