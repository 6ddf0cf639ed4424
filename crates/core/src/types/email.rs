//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An email address used as the identity key.
///
/// The value is stored exactly as the user typed it. There is no format
/// validation: registration accepts any string, and the same string is later
/// echoed back through the session cookie.
///
/// ## Examples
///
/// ```
/// use habit_tracker_core::Email;
///
/// let email = Email::new("a@x.com");
/// assert_eq!(email.as_str(), "a@x.com");
///
/// // No validation is performed
/// assert_eq!(Email::new("not an email").as_str(), "not an email");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap a string as an `Email` without validation.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if the address is the empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Email {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Email {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_input_verbatim() {
        assert_eq!(Email::new("User@Example.COM").as_str(), "User@Example.COM");
        assert_eq!(Email::new(" padded ").as_str(), " padded ");
    }

    #[test]
    fn test_is_empty() {
        assert!(Email::new("").is_empty());
        assert!(!Email::new("a@x.com").is_empty());
    }

    #[test]
    fn test_display() {
        let email = Email::new("user@example.com");
        assert_eq!(format!("{email}"), "user@example.com");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let email = Email::new("user@example.com");
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Email::new("a@x.com") < Email::new("b@x.com"));
    }
}
