//! Habit store repository.
//!
//! Backed by the `habits.json` document: email → habits in insertion order.
//! The owning email is not checked against the user registry.

use std::path::Path;

use habit_tracker_core::{Email, Habit, HabitDocument};

use super::{RepositoryError, document};

/// Repository for habit store operations.
pub struct HabitRepository<'a> {
    path: &'a Path,
}

impl<'a> HabitRepository<'a> {
    /// Create a new habit repository over the document at `path`.
    #[must_use]
    pub const fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// List a user's habits in insertion order (empty if the user has none).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or parsed.
    pub async fn list_for_user(&self, email: &Email) -> Result<Vec<Habit>, RepositoryError> {
        let mut habits: HabitDocument = document::load(self.path).await?;
        Ok(habits.remove(email).unwrap_or_default())
    }

    /// Append a habit to the end of a user's list and persist the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub async fn append(&self, email: &Email, habit: Habit) -> Result<(), RepositoryError> {
        let mut habits: HabitDocument = document::load(self.path).await?;
        habits.entry(email.clone()).or_default().push(habit);
        document::save(self.path, &habits).await
    }
}
