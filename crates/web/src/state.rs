//! Application state shared across handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::HabitConfig;
use crate::db::habits::HabitRepository;
use crate::db::users::UserRepository;
use crate::services::auth::AuthService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds no cached data:
/// repositories re-read their documents on every call.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: HabitConfig,
    users_path: PathBuf,
    habits_path: PathBuf,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: HabitConfig) -> Self {
        let users_path = config.users_path();
        let habits_path = config.habits_path();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                users_path,
                habits_path,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &HabitConfig {
        &self.inner.config
    }

    /// Repository over the user registry document.
    #[must_use]
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.inner.users_path)
    }

    /// Repository over the habit store document.
    #[must_use]
    pub fn habits(&self) -> HabitRepository<'_> {
        HabitRepository::new(&self.inner.habits_path)
    }

    /// Authentication service over the user registry.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.users_path)
    }
}
