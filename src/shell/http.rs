use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit,
        multipart::MultipartError,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::manage_activities::inbound::http as activities_http;
use crate::modules::attachments::core::upload::MAX_FILE_SIZE_BYTES;
use crate::modules::attachments::use_cases::manage_attachment::inbound::http as attachments_http;
use crate::modules::registrations::use_cases::manage_registrations::inbound::http as registrations_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

/// Leaves room for multipart framing so oversized files reach the size check.
const BODY_LIMIT_BYTES: usize = 2 * MAX_FILE_SIZE_BYTES;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(activities_http::routes())
        .merge(attachments_http::routes())
        .merge(registrations_http::routes())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApplicationError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApplicationError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApplicationError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApplicationError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApplicationError::Internal(message) => {
                tracing::error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApplicationError {
    fn from(rejection: QueryRejection) -> Self {
        ApplicationError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApplicationError {
    fn from(error: MultipartError) -> Self {
        ApplicationError::BadRequest(error.body_text())
    }
}
