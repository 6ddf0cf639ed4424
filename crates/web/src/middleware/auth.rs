//! Authentication extractors.
//!
//! Provides extractors for requiring a session in route handlers.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::models::CurrentUser;
use crate::routes::found;

use super::session::read_session_email;

/// Extractor that requires a session cookie.
///
/// If the `user_email` cookie is absent, the handler never runs and the
/// client is redirected (302) to `/login`. The email is not checked against
/// the user registry.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Rejection returned when a session is required but missing.
#[derive(Debug)]
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => found("/login"),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = read_session_email(&parts.headers).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "no session cookie, redirecting to login");
            AuthRejection::RedirectToLogin
        })?;

        Ok(Self(CurrentUser::new(email)))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request if there is no session.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(read_session_email(&parts.headers).map(CurrentUser::new)))
    }
}
