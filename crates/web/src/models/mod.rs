//! Domain models for the web layer.
//!
//! Persisted records (`Habit`, `UserRecord`) live in `habit-tracker-core`;
//! this module holds request-scoped types only.

pub mod session;

pub use session::{CurrentUser, session_keys};
