//! Habit Tracker Core - Shared domain types.
//!
//! This crate provides the types persisted and rendered by the web server:
//! - [`UserRecord`] - A registered user's credential record
//! - [`Habit`] - A single tracked habit
//! - [`CompletionStats`] - Completion percentage derived from a habit list
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP. Storage layout and
//! request handling live in `habit-tracker-web`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
