//! Habit record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A habit tracked by a user.
///
/// Serialized field order matches the on-disk layout:
///
/// ```json
/// {"title": "Run", "description": "daily run", "start_date": "2026-10-19", "streak": 0}
/// ```
///
/// Habits are append-only. Nothing increments `streak` after creation; the
/// stats page still reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Short name shown in the list.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Calendar date the habit was added (ISO `YYYY-MM-DD`).
    pub start_date: NaiveDate,
    /// Consecutive completions. Missing on disk reads as 0.
    #[serde(default)]
    pub streak: u32,
}

impl Habit {
    /// Create a habit starting on `start_date` with a zero streak.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_date,
            streak: 0,
        }
    }

    /// A habit counts as completed once its streak is positive.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.streak > 0
    }
}
