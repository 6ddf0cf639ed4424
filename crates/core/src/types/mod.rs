//! Core types for the habit tracker.

pub mod email;
pub mod habit;
pub mod stats;
pub mod user;

use std::collections::BTreeMap;

pub use email::Email;
pub use habit::Habit;
pub use stats::CompletionStats;
pub use user::UserRecord;

/// Whole-document shape of the user registry: email to credential record.
pub type UserDocument = BTreeMap<Email, UserRecord>;

/// Whole-document shape of the habit store: email to habits in insertion order.
pub type HabitDocument = BTreeMap<Email, Vec<Habit>>;
