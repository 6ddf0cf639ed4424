//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalAuth;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Email from the session cookie, if any.
    pub email: Option<String>,
}

/// Display the landing page.
///
/// Links to the habit pages when a session cookie is present, otherwise to
/// login and registration.
pub async fn index(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    IndexTemplate {
        email: user.map(|u| u.email.into_inner()),
    }
}
