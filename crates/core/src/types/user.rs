//! User credential record.

use serde::{Deserialize, Serialize};

/// Credential record stored per email in the user registry.
///
/// The password is kept in plaintext and compared by equality. `Debug` is
/// implemented manually to keep it out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
}

impl UserRecord {
    /// Create a record for the given password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Plain equality against the submitted password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("password", &"[REDACTED]")
            .finish()
    }
}
