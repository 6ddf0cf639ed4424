//! Persistence for the habit tracker.
//!
//! # Storage: flat JSON documents
//!
//! Two documents live in the configured data directory:
//!
//! - `users.json` - email → `{"password": ...}`
//! - `habits.json` - email → list of habit records
//!
//! Every operation loads the whole document fresh and writes it back whole.
//! Nothing coordinates concurrent writers, so a read-modify-write race can
//! drop one writer's update.
//!
//! Handlers go through [`users::UserRepository`] and
//! [`habits::HabitRepository`] only; the document format stays behind them.

pub mod document;
pub mod habits;
pub mod users;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing a document failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be parsed or serialized.
    #[error("malformed document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Uniqueness violation (e.g., email already registered).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
