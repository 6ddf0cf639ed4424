//! User registry repository.
//!
//! Backed by the `users.json` document: email → `{"password": ...}`.

use std::path::Path;

use habit_tracker_core::{Email, UserDocument, UserRecord};

use super::{RepositoryError, document};

/// Repository for user registry operations.
pub struct UserRepository<'a> {
    path: &'a Path,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository over the document at `path`.
    #[must_use]
    pub const fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Get a user's credential record by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or parsed.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<UserRecord>, RepositoryError> {
        let mut users: UserDocument = document::load(self.path).await?;
        Ok(users.remove(email))
    }

    /// Insert a new user and persist the registry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists; the
    /// stored record is left untouched in that case.
    /// Returns `RepositoryError::Io`/`Json` if the document cannot be read or written.
    pub async fn create(&self, email: &Email, password: &str) -> Result<UserRecord, RepositoryError> {
        let mut users: UserDocument = document::load(self.path).await?;

        if users.contains_key(email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {email}"
            )));
        }

        let record = UserRecord::new(password);
        users.insert(email.clone(), record.clone());
        document::save(self.path, &users).await?;

        Ok(record)
    }
}
