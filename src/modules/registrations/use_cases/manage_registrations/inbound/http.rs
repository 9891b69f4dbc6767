use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use crate::modules::registrations::use_cases::manage_registrations::command::{
    RegisterForEvent, UnregisterFromEvent,
};
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/event-registration/attend", post(attend))
        .route("/event-registration/unattend", delete(unattend))
        .route("/event-registration/event/{event_id}", get(stats_for_event))
        .route("/event-registration/user/{user_id}", get(events_for_user))
        .route(
            "/event-registration/attending/{event_id}/{user_id}",
            get(is_attending),
        )
}

pub async fn attend(
    State(state): State<AppState>,
    body: Result<Json<RegisterForEvent>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body?;
    let registration = state.registrations.attend(command).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn unattend(
    State(state): State<AppState>,
    body: Result<Json<UnregisterFromEvent>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body?;
    Ok(Json(state.registrations.unattend(command).await?))
}

pub async fn stats_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(state.registrations.stats_for_event(&event_id).await?))
}

pub async fn events_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(state.registrations.events_for_user(&user_id).await?))
}

pub async fn is_attending(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(
        state
            .registrations
            .is_attending(&event_id, &user_id)
            .await?,
    ))
}
