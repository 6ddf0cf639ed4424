//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, framing, sniffing)
//!
//! Authentication is not a layer: protected handlers take the
//! [`RequireAuth`] extractor, which reads the session cookie.

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{AuthRejection, OptionalAuth, RequireAuth};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{clear_current_user, read_session_email, set_current_user};
