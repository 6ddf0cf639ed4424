//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /register               - Registration form
//! POST /register               - Register (302 → /login, or form + error)
//! GET  /login                  - Login form
//! POST /login                  - Login (302 → /habits + cookie, or form + error)
//! POST /logout                 - Expire the session cookie (302 → /)
//!
//! # Habits (require the `user_email` cookie, else 302 → /login)
//! GET  /habits                 - Habit list and add form
//! POST /add_habit              - Append a habit (302 → /habits)
//! GET  /stats                  - Habit list and completion percentage
//!
//! # Static
//! GET  /static/*               - Files from the configured static directory
//! ```

pub mod auth;
pub mod habits;
pub mod home;
pub mod stats;

use axum::{
    Router,
    extract::Request,
    http::{StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Deserializer};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Redirect with `302 Found`.
///
/// axum's `Redirect::to` answers 303; form posts here answer 302.
#[must_use]
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Deserialize a required form field, rejecting the empty string.
///
/// The `Form` extractor turns the error into a 422, the same response a
/// missing field gets.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("field must not be empty"));
    }
    Ok(s)
}

/// Create all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::index))
        // Auth routes
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        // Habit routes
        .route("/habits", get(habits::index))
        .route("/add_habit", post(habits::add))
        .route("/stats", get(stats::show))
}

/// Build the full application router with middleware and state applied.
///
/// Sentry layers are added by the binary so tests can drive this router
/// without a Sentry client.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the data files.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
