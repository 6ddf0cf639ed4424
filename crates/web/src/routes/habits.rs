//! Habit list and creation handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use tracing::instrument;

use habit_tracker_core::Habit;

use super::{found, non_empty_string};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// New habit form data.
#[derive(Debug, Deserialize)]
pub struct AddHabitForm {
    #[serde(deserialize_with = "non_empty_string")]
    pub title: String,
    #[serde(deserialize_with = "non_empty_string")]
    pub description: String,
}

/// Habit list page template.
#[derive(Template, WebTemplate)]
#[template(path = "habits.html")]
pub struct HabitsTemplate {
    pub email: String,
    pub habits: Vec<Habit>,
}

/// Display the caller's habits in insertion order.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<HabitsTemplate> {
    let habits = state.habits().list_for_user(&user.email).await?;

    Ok(HabitsTemplate {
        email: user.email.into_inner(),
        habits,
    })
}

/// Append a habit dated today with a zero streak, then redirect to the list.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddHabitForm>,
) -> Result<Response> {
    let today = chrono::Local::now().date_naive();
    let habit = Habit::new(form.title, form.description, today);

    state.habits().append(&user.email, habit).await?;
    tracing::info!("Habit added");

    Ok(found("/habits"))
}
