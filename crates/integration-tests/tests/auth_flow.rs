//! Registration, login and logout through the HTTP surface.

use axum::http::{StatusCode, header};

use habit_tracker_core::Email;
use habit_tracker_integration_tests::{TestContext, assert_found, body_text, session_cookie};

#[tokio::test]
async fn test_register_redirects_to_login() {
    let ctx = TestContext::new();

    let response = ctx.register("a@x.com", "p1").await;
    assert_found(&response, "/login");
    assert!(session_cookie(&response).is_none());

    let users = ctx.users_on_disk().await;
    assert!(users[&Email::new("a@x.com")].password_matches("p1"));
}

#[tokio::test]
async fn test_register_duplicate_rerenders_form_and_keeps_password() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "p1").await;

    let response = ctx.register("a@x.com", "changed").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("This email is already registered"));
    assert!(body.contains("action=\"/register\""));

    let users = ctx.users_on_disk().await;
    assert_eq!(users.len(), 1);
    assert!(users[&Email::new("a@x.com")].password_matches("p1"));
}

#[tokio::test]
async fn test_register_writes_indented_document() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "p1").await;

    let text = tokio::fs::read_to_string(ctx.users_path()).await.unwrap();
    assert_eq!(
        text,
        "{\n    \"a@x.com\": {\n        \"password\": \"p1\"\n    }\n}"
    );
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "p1").await;

    let response = ctx.login("a@x.com", "p1").await;
    assert_found(&response, "/habits");
    assert_eq!(session_cookie(&response).as_deref(), Some("a%40x.com"));

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(!set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains("Max-Age"));
}

#[tokio::test]
async fn test_login_wrong_password_rerenders_form() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "p1").await;

    let response = ctx.login("a@x.com", "wrong").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());

    let body = body_text(response).await;
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains("action=\"/login\""));
}

#[tokio::test]
async fn test_login_unknown_email_rerenders_form() {
    let ctx = TestContext::new();

    let response = ctx.login("nobody@x.com", "p1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    assert!(body_text(response).await.contains("Invalid email or password"));

    // A failed login never creates the registry
    assert!(!ctx.users_path().exists());
}

#[tokio::test]
async fn test_login_missing_field_is_rejected_by_form_extractor() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/login", &[("email", "a@x.com")], None).await;
    assert!(response.status().is_client_error());
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_login_empty_password_is_rejected() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "p1").await;

    let response = ctx.login("a@x.com", "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_register_empty_fields_rejected_without_writing() {
    let ctx = TestContext::new();

    for (email, password) in [("", ""), ("", "p1"), ("a@x.com", "")] {
        let response = ctx.register(email, password).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
    assert!(!ctx.users_path().exists());

    ctx.register("a@x.com", "p1").await;
    let before = tokio::fs::read(ctx.users_path()).await.unwrap();

    let response = ctx.register("", "p2").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let after = tokio::fs::read(ctx.users_path()).await.unwrap();
    assert_eq!(before, after);
    assert!(!ctx.habits_path().exists());
}

#[tokio::test]
async fn test_session_identifies_users_with_awkward_emails() {
    let ctx = TestContext::new();

    for email in ["a;b@x.com", "a b@x.com", "a\nb@x.com"] {
        ctx.register(email, "p1").await;

        let response = ctx.login(email, "p1").await;
        assert_found(&response, "/habits");
        let session = session_cookie(&response).unwrap();

        assert_found(&ctx.add_habit(&session, "Run", "daily run").await, "/habits");

        let response = ctx.get("/habits", Some(&session)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Run"));

        let habits = ctx.habits_on_disk().await;
        assert_eq!(habits[&Email::new(email)].len(), 1, "{email:?}");
    }

    // Each habit landed under the full email, never a truncated prefix
    let habits = ctx.habits_on_disk().await;
    assert_eq!(habits.len(), 3);
    assert!(!habits.contains_key(&Email::new("a")));
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let ctx = TestContext::new();

    let response = ctx.post_form("/logout", &[], Some("a@x.com")).await;
    assert_found(&response, "/");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("user_email=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_malformed_registry_is_server_error() {
    let ctx = TestContext::new();
    tokio::fs::create_dir_all(ctx.users_path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(ctx.users_path(), b"{\"a@x.com\": ").await.unwrap();

    let response = ctx.login("a@x.com", "p1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal server error");
}
