//! Cookie session helpers.
//!
//! The session is a single unsigned cookie, `user_email`, holding the
//! logged-in user's email, percent-encoded so that any registrable email
//! (including `;`, spaces and control characters) survives the round trip
//! through the browser. It has no expiry and no `HttpOnly` or
//! `Secure` flag, so existing front-end scripts can keep reading it. Anyone
//! can forge it; the value is trusted as-is.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue, SET_COOKIE},
};
use tower_sessions::cookie::{Cookie, SameSite, time::Duration};

use habit_tracker_core::Email;

use crate::models::session_keys;

/// Build the session cookie for `email`.
fn session_cookie(email: &Email) -> Cookie<'static> {
    let value = urlencoding::encode(email.as_str()).into_owned();
    Cookie::build((session_keys::USER_EMAIL, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

/// Build a cookie that removes the session from the browser.
fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((session_keys::USER_EMAIL, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(0))
        .build()
}

/// Add a `Set-Cookie` header starting a session for `email`.
///
/// # Errors
///
/// Returns an error if the cookie cannot be used as a header value. The
/// email is percent-encoded first, so this does not happen in practice.
pub fn set_current_user(headers: &mut HeaderMap, email: &Email) -> Result<(), InvalidHeaderValue> {
    let value = HeaderValue::from_str(&session_cookie(email).to_string())?;
    headers.append(SET_COOKIE, value);
    Ok(())
}

/// Add a `Set-Cookie` header ending the session (logout).
pub fn clear_current_user(headers: &mut HeaderMap) {
    if let Ok(value) = HeaderValue::from_str(&expired_session_cookie().to_string()) {
        headers.append(SET_COOKIE, value);
    }
}

/// Read the session email from the request's `Cookie` headers.
///
/// Returns `None` when the cookie is absent, empty, or does not decode to
/// UTF-8. Surrounding double quotes are stripped, so quoted values written
/// by older servers still resolve to the bare email. Unencoded values
/// decode to themselves.
#[must_use]
pub fn read_session_email(headers: &HeaderMap) -> Option<Email> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| std::str::from_utf8(value.as_bytes()).ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == session_keys::USER_EMAIL)
        .and_then(|cookie| {
            urlencoding::decode(cookie.value_trimmed())
                .ok()
                .map(|email| Email::new(email.into_owned()))
        })
        .filter(|email| !email.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cookie_headers(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_set_current_user_header() {
        let mut headers = HeaderMap::new();
        set_current_user(&mut headers, &Email::new("a@x.com")).unwrap();

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("user_email=a%40x.com;"));
        assert!(set_cookie.contains("Path=/"));
        assert!(!set_cookie.contains("HttpOnly"));
        assert!(!set_cookie.contains("Secure"));
        assert!(!set_cookie.contains("Max-Age"));
        assert!(!set_cookie.contains("Expires"));
    }

    /// Write the session for `email`, then read it back as the browser would
    /// send it.
    fn round_trip(email: &str) -> Option<Email> {
        let mut headers = HeaderMap::new();
        set_current_user(&mut headers, &Email::new(email)).unwrap();

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap();
        let cookie = format!("theme=dark; {pair}");
        read_session_email(&cookie_headers(&[cookie.as_str()]))
    }

    #[test]
    fn test_session_round_trips_awkward_emails() {
        for email in [
            "a@x.com",
            "a;b@x.com",
            "a b@x.com",
            "a,b=c@x.com",
            "\"quoted\"@x.com",
            "100%@x.com",
            "a\nb@x.com",
            "a\r\nX-Evil: 1",
            "ünïcödé@x.com",
        ] {
            assert_eq!(round_trip(email), Some(Email::new(email)), "{email:?}");
        }
    }

    #[test]
    fn test_set_current_user_encodes_separators() {
        let mut headers = HeaderMap::new();
        set_current_user(&mut headers, &Email::new("a;b c@x.com")).unwrap();

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("user_email=a%3Bb%20c%40x.com;"));
    }

    #[test]
    fn test_clear_current_user_expires_cookie() {
        let mut headers = HeaderMap::new();
        clear_current_user(&mut headers);

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("user_email=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_read_session_email() {
        let headers = cookie_headers(&["theme=dark; user_email=a@x.com"]);
        assert_eq!(read_session_email(&headers), Some(Email::new("a@x.com")));
    }

    #[test]
    fn test_read_session_email_across_headers() {
        let headers = cookie_headers(&["theme=dark", "user_email=b@x.com"]);
        assert_eq!(read_session_email(&headers), Some(Email::new("b@x.com")));
    }

    #[test]
    fn test_read_session_email_strips_quotes() {
        let headers = cookie_headers(&["user_email=\"a@x.com\""]);
        assert_eq!(read_session_email(&headers), Some(Email::new("a@x.com")));
    }

    #[test]
    fn test_read_session_email_missing_or_empty() {
        assert_eq!(read_session_email(&HeaderMap::new()), None);
        assert_eq!(read_session_email(&cookie_headers(&["theme=dark"])), None);
        assert_eq!(read_session_email(&cookie_headers(&["user_email="])), None);
    }
}
