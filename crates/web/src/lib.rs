//! Habit Tracker web server library.
//!
//! This crate provides the server as a library, allowing the router to be
//! driven directly from tests. The binary in `main.rs` adds configuration,
//! logging, Sentry and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
pub use state::AppState;
