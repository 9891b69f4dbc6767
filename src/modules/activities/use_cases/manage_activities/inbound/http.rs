use axum::{
    Json, Router,
    body::Bytes,
    extract::{Multipart, Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;

use crate::modules::activities::core::authorization::{can_create, can_mutate};
use crate::modules::activities::core::filter::ActivityFilter;
use crate::modules::activities::use_cases::manage_activities::command::{
    AttendActivity, CreateActivity, UpdateActivity,
};
use crate::modules::attachments::use_cases::manage_attachment::inbound::http::read_upload;
use crate::shared::core::caller::Caller;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

const COVER_IMAGE_FIELD: &str = "coverImage";
const DOCUMENT_FIELD: &str = "document";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list))
        .route("/events/find/{id}", get(find))
        .route("/events/user/{user_id}", get(list_by_user))
        .route("/events/new", post(create))
        .route("/events/attend/{id}", post(attend))
        .route("/events/update/{id}", put(update))
        .route("/events/remove/{id}", delete(remove))
        .route("/events/archive/{id}", put(toggle_archive))
        .route(
            "/events/{id}/cover-image",
            put(set_cover_image).delete(clear_cover_image),
        )
        .route(
            "/events/{id}/document",
            put(set_document).delete(clear_document),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct ListActivitiesParams {
    pub page: Option<u64>,
    pub tag: Option<String>,
    pub archived: Option<bool>,
    pub hidden: Option<bool>,
}

impl ListActivitiesParams {
    fn into_filter(self, page_size: u64) -> ActivityFilter {
        ActivityFilter {
            archived: self.archived.unwrap_or(false),
            hidden: self.hidden.unwrap_or(false),
            page: self.page.unwrap_or(1),
            page_size,
            ..ActivityFilter::default()
        }
        .with_tag_param(self.tag.as_deref())
    }
}

/// Loads the activity and checks the caller may change it.
async fn authorize(state: &AppState, caller: &Caller, id: &str) -> Result<(), ApplicationError> {
    let activity = state.activities.get_by_id(id).await?;
    if !can_mutate(caller, &activity) {
        tracing::warn!(activity_id = %id, caller = %caller.id, "mutation refused");
        return Err(ApplicationError::Unauthorized(
            "You are not authorized to modify this event".into(),
        ));
    }
    Ok(())
}

pub async fn list(
    State(state): State<AppState>,
    caller: Option<Caller>,
    params: Result<Query<ListActivitiesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Query(params) = params?;
    let filter = params.into_filter(state.page_size);
    let activities = state.activities.list(&filter, caller.as_ref()).await?;
    Ok(Json(activities))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(state.activities.get_by_id(&id).await?))
}

pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    params: Result<Query<ListActivitiesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Query(params) = params?;
    let filter = params.into_filter(state.page_size);
    Ok(Json(state.activities.list_by_user(&user_id, &filter).await?))
}

pub async fn create(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<CreateActivity>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    if !can_create(&caller) {
        return Err(ApplicationError::Unauthorized(
            "You are not authorized to create events".into(),
        ));
    }
    let Json(command) = body?;
    let outcome = state.activities.create(command, &caller).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// The body is optional; an empty one counts an anonymous attendee.
pub async fn attend(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = if body.is_empty() {
        AttendActivity::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApplicationError::BadRequest(e.to_string()))?
    };
    Ok(Json(state.activities.attend(&id, command).await?))
}

pub async fn update(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    body: Result<Json<UpdateActivity>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(command) = body?;
    authorize(&state, &caller, &id).await?;
    Ok(Json(state.activities.update(&id, command, &caller).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    Ok(Json(state.activities.soft_delete(&id).await?))
}

pub async fn toggle_archive(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    Ok(Json(state.activities.toggle_archive(&id).await?))
}

pub async fn set_cover_image(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    let file = read_upload(multipart, COVER_IMAGE_FIELD).await?;
    Ok(Json(state.activities.set_cover_image(&id, file).await?))
}

pub async fn clear_cover_image(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    Ok(Json(state.activities.clear_cover_image(&id).await?))
}

pub async fn set_document(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    let file = read_upload(multipart, DOCUMENT_FIELD).await?;
    Ok(Json(state.activities.set_document(&id, file).await?))
}

pub async fn clear_document(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    authorize(&state, &caller, &id).await?;
    Ok(Json(state.activities.clear_document(&id).await?))
}
