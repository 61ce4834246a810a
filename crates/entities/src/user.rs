//! User-related entity definitions.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is kept exactly as submitted; this service does no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address, unique across the store.
    pub email: String,
    /// Password as given at registration.
    pub password: String,
}

impl User {
    /// Creates a new user.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
