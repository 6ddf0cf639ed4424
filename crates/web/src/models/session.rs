//! Session-related types.
//!
//! The session is the `user_email` cookie itself. Its value is trusted as
//! given: it is not signed, and the email is not looked up in the registry.

use habit_tracker_core::Email;

/// Identity of the caller, read from the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Email taken verbatim from the cookie.
    pub email: Email,
}

impl CurrentUser {
    #[must_use]
    pub const fn new(email: Email) -> Self {
        Self { email }
    }
}

/// Cookie names used for session state.
pub mod session_keys {
    /// Cookie holding the logged-in user's email.
    pub const USER_EMAIL: &str = "user_email";
}
