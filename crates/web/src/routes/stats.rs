//! Completion statistics handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use habit_tracker_core::{CompletionStats, Habit};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Stats page template.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub habits: Vec<Habit>,
    pub stats: CompletionStats,
}

/// Display the caller's habits with the share of habits on a streak.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<StatsTemplate> {
    let habits = state.habits().list_for_user(&user.email).await?;
    let stats = CompletionStats::from_habits(&habits);

    Ok(StatsTemplate { habits, stats })
}
