//! Authentication service.
//!
//! Password registration and login against the user registry. Passwords are
//! stored and compared as plaintext; there is no hashing and no email or
//! password policy.

mod error;

pub use error::AuthError;

use std::path::Path;

use habit_tracker_core::Email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over the user registry at `users_path`.
    #[must_use]
    pub const fn new(users_path: &'a Path) -> Self {
        Self {
            users: UserRepository::new(users_path),
        }
    }

    /// Register a new user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    /// Returns `AuthError::Repository` if the registry cannot be read or written.
    pub async fn register_with_password(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<(), AuthError> {
        self.users
            .create(email, password)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(())
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or the
    /// password does not match.
    pub async fn login_with_password(&self, email: &Email, password: &str) -> Result<(), AuthError> {
        let record = self
            .users
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if record.password_matches(password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
