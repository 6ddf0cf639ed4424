//! Integration tests for the habit tracker.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p habit-tracker-integration-tests
//! ```
//!
//! Each test gets a [`TestContext`]: the full router over a fresh temporary
//! data directory. Requests go through `tower::ServiceExt::oneshot`, so no
//! listener or network is involved.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use habit_tracker_core::{HabitDocument, UserDocument};
use habit_tracker_web::{AppState, app, config::HabitConfig};

/// A router over an isolated data directory.
pub struct TestContext {
    pub state: AppState,
    _data_dir: TempDir,
}

impl TestContext {
    /// Create a context with an empty data directory.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let config = HabitConfig::with_data_dir(data_dir.path().join("data"));
        Self {
            state: AppState::new(config),
            _data_dir: data_dir,
        }
    }

    /// Build a fresh router sharing this context's state.
    #[must_use]
    pub fn router(&self) -> Router {
        app(self.state.clone())
    }

    /// Path of the user registry document.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.state.config().users_path()
    }

    /// Path of the habit store document.
    #[must_use]
    pub fn habits_path(&self) -> PathBuf {
        self.state.config().habits_path()
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }

    /// `GET path`, optionally with a session cookie.
    pub async fn get(&self, path: &str, session: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(email) = session {
            builder = builder.header(header::COOKIE, format!("user_email={email}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// `POST path` with a url-encoded form, optionally with a session cookie.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        session: Option<&str>,
    ) -> Response<Body> {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(email) = session {
            builder = builder.header(header::COOKIE, format!("user_email={email}"));
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    /// Register a user through the HTTP surface.
    pub async fn register(&self, email: &str, password: &str) -> Response<Body> {
        self.post_form("/register", &[("email", email), ("password", password)], None)
            .await
    }

    /// Log a user in through the HTTP surface.
    pub async fn login(&self, email: &str, password: &str) -> Response<Body> {
        self.post_form("/login", &[("email", email), ("password", password)], None)
            .await
    }

    /// Add a habit through the HTTP surface.
    pub async fn add_habit(&self, email: &str, title: &str, description: &str) -> Response<Body> {
        self.post_form(
            "/add_habit",
            &[("title", title), ("description", description)],
            Some(email),
        )
        .await
    }

    /// Read the user registry straight from disk.
    pub async fn users_on_disk(&self) -> UserDocument {
        read_document(&self.users_path()).await
    }

    /// Read the habit store straight from disk.
    pub async fn habits_on_disk(&self) -> HabitDocument {
        read_document(&self.habits_path()).await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_document<T>(path: &std::path::Path) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap(),
        Err(_) => T::default(),
    }
}

/// Percent-encode a form value.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'*' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a `302 Found` redirect to `location`.
pub fn assert_found(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], location);
}

/// Value of the `user_email` cookie set by the response, if any.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix("user_email="))
        .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
}
