//! Stats page through the HTTP surface.

use axum::http::StatusCode;

use habit_tracker_core::{Email, Habit, HabitDocument};
use habit_tracker_integration_tests::{TestContext, assert_found, body_text, session_cookie};

/// Extract the rendered percentage from the stats page.
fn rendered_percent(body: &str) -> u32 {
    let start = body.find("<span id=\"percent\">").unwrap() + "<span id=\"percent\">".len();
    let end = start + body[start..].find('<').unwrap();
    body[start..end].parse().unwrap()
}

async fn seed_habits(ctx: &TestContext, email: &str, streaks: &[u32]) {
    let day = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let habits = streaks
        .iter()
        .enumerate()
        .map(|(i, &streak)| {
            let mut habit = Habit::new(format!("habit {i}"), "seeded", day);
            habit.streak = streak;
            habit
        })
        .collect();

    let mut document = HabitDocument::new();
    document.insert(Email::new(email), habits);

    tokio::fs::create_dir_all(ctx.habits_path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(ctx.habits_path(), serde_json::to_vec(&document).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_stats_empty_list_is_zero() {
    let ctx = TestContext::new();

    let response = ctx.get("/stats", Some("a@x.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(rendered_percent(&body_text(response).await), 0);
}

#[tokio::test]
async fn test_stats_counts_positive_streaks() {
    let ctx = TestContext::new();
    seed_habits(&ctx, "a@x.com", &[0, 3, 0]).await;

    let body = body_text(ctx.get("/stats", Some("a@x.com")).await).await;
    assert_eq!(rendered_percent(&body), 33);
    assert!(body.contains("1 of 3 habits"));
}

#[tokio::test]
async fn test_stats_all_on_streak() {
    let ctx = TestContext::new();
    seed_habits(&ctx, "a@x.com", &[1, 2]).await;

    let body = body_text(ctx.get("/stats", Some("a@x.com")).await).await;
    assert_eq!(rendered_percent(&body), 100);
}

#[tokio::test]
async fn test_stats_reads_habits_without_streak_field() {
    let ctx = TestContext::new();
    tokio::fs::create_dir_all(ctx.habits_path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(
        ctx.habits_path(),
        r#"{"a@x.com": [{"title": "Run", "description": "d", "start_date": "2025-05-01"}]}"#,
    )
    .await
    .unwrap();

    let body = body_text(ctx.get("/stats", Some("a@x.com")).await).await;
    assert_eq!(rendered_percent(&body), 0);
    assert!(body.contains("2025-05-01"));
}

#[tokio::test]
async fn test_stats_malformed_store_is_server_error() {
    let ctx = TestContext::new();
    tokio::fs::create_dir_all(ctx.habits_path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(ctx.habits_path(), b"not json").await.unwrap();

    let response = ctx.get("/stats", Some("a@x.com")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_full_flow() {
    let ctx = TestContext::new();

    assert_found(&ctx.register("a@x.com", "p1").await, "/login");

    let response = ctx.login("a@x.com", "p1").await;
    assert_found(&response, "/habits");
    let session = session_cookie(&response).unwrap();
    assert_eq!(session, "a%40x.com");

    assert_found(&ctx.add_habit(&session, "Run", "daily run").await, "/habits");

    let habits = ctx.habits_on_disk().await;
    assert_eq!(habits.len(), 1);
    assert_eq!(
        habits[&Email::new("a@x.com")],
        vec![Habit::new("Run", "daily run", chrono::Local::now().date_naive())]
    );

    let body = body_text(ctx.get("/habits", Some(&session)).await).await;
    assert!(body.contains("Run"));
    assert!(body.contains("daily run"));

    let body = body_text(ctx.get("/stats", Some(&session)).await).await;
    assert_eq!(rendered_percent(&body), 0);
}
