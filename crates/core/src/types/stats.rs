//! Completion statistics over a habit list.

use crate::Habit;

/// Summary shown on the stats page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionStats {
    /// Number of habits.
    pub total: usize,
    /// Habits with a positive streak.
    pub completed: usize,
    /// `100 * completed / total`, truncated. Always in `0..=100`.
    pub percent: u8,
}

impl CompletionStats {
    /// Compute stats for a habit list. An empty list yields 0%.
    #[must_use]
    pub fn from_habits(habits: &[Habit]) -> Self {
        let total = habits.len();
        let completed = habits.iter().filter(|h| h.is_completed()).count();
        let percent = if total == 0 {
            0
        } else {
            // completed <= total, so the quotient never exceeds 100
            u8::try_from(completed * 100 / total).unwrap_or(100)
        };

        Self {
            total,
            completed,
            percent,
        }
    }
}
