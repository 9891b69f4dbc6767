// Caller identity extraction.
//
// An upstream gateway authenticates requests and forwards the result in the
// `x-user-id` and `x-user-role` headers. Handlers that need a caller take
// `Caller`; handlers where a caller is optional take `Option<Caller>`.

use crate::shared::core::caller::{Caller, Role};
use crate::shared::core::errors::ApplicationError;
use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn caller_from(parts: &Parts, id: &str) -> Result<Caller, ApplicationError> {
    let role = header(parts, USER_ROLE_HEADER)
        .ok_or_else(|| ApplicationError::Unauthorized("Missing caller role".into()))?
        .parse::<Role>()
        .map_err(ApplicationError::Unauthorized)?;
    Ok(Caller::new(id, role))
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header(parts, USER_ID_HEADER)
            .ok_or_else(|| ApplicationError::Unauthorized("Missing caller identity".into()))?;
        caller_from(parts, id)
    }
}

impl<S> OptionalFromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match header(parts, USER_ID_HEADER) {
            None => Ok(None),
            Some(id) => caller_from(parts, id).map(Some),
        }
    }
}
