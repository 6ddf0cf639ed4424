//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Registration and password login against the user registry

pub mod auth;
