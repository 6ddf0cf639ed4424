//! Authentication route handlers.
//!
//! Registration and login re-render their form with an error message on
//! failure (200) and redirect with 302 on success.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use habit_tracker_core::Email;

use super::{found, non_empty_string};
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Shown when registering an email that already exists.
pub const EMAIL_TAKEN_MESSAGE: &str = "This email is already registered";

/// Shown when the email is unknown or the password does not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(deserialize_with = "non_empty_string")]
    pub email: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub password: String,
}

/// Registration form data.
#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(deserialize_with = "non_empty_string")]
    pub email: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate { error: None }
}

/// Handle registration form submission.
///
/// Stores `{email: {password}}` in the user registry unless the email is
/// already present, in which case the stored record is left as it was.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let email = Email::new(form.email);

    match state
        .auth()
        .register_with_password(&email, &form.password)
        .await
    {
        Ok(()) => {
            tracing::info!(email = %email, "User registered");
            Ok(found("/login"))
        }
        Err(AuthError::UserAlreadyExists) => {
            tracing::info!(email = %email, "Registration rejected: email taken");
            Ok(RegisterTemplate {
                error: Some(EMAIL_TAKEN_MESSAGE.to_string()),
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle login form submission.
///
/// On a plaintext password match, sets the `user_email` cookie and
/// redirects to the habit list.
#[instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Result<Response> {
    let email = Email::new(form.email);

    match state.auth().login_with_password(&email, &form.password).await {
        Ok(()) => {
            let mut response = found("/habits");
            set_current_user(response.headers_mut(), &email)
                .map_err(|e| AppError::Internal(format!("cannot encode session cookie: {e}")))?;

            set_sentry_user(email.as_str());
            tracing::info!(email = %email, "User logged in");
            Ok(response)
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(email = %email, "Login failed: invalid credentials");
            Ok(LoginTemplate {
                error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Expires the session cookie. The data files are not touched.
pub async fn logout() -> Response {
    let mut response = found("/");
    clear_current_user(response.headers_mut());
    clear_sentry_user();
    response
}
