//! Request extractors for session and identity headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use common::UserId;

use crate::error::ApiError;

/// Header naming the shopper's cart session.
pub const SESSION_HEADER: &str = "x-session-id";

/// Header carrying the authenticated user's UUID.
pub const USER_HEADER: &str = "x-user-id";

/// The cart session a request belongs to. Required.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

impl<S: Send + Sync> FromRequestParts<S> for SessionId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = header_str(parts, SESSION_HEADER)?
            .ok_or_else(|| ApiError::BadRequest(format!("Missing {SESSION_HEADER} header")))?;
        Ok(SessionId(value.to_string()))
    }
}

/// The signed-in user, if any.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Option<UserId>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = header_str(parts, USER_HEADER)? else {
            return Ok(CurrentUser(None));
        };
        let user_id = value
            .parse::<UserId>()
            .map_err(|e| ApiError::BadRequest(format!("Invalid {USER_HEADER}: {e}")))?;
        Ok(CurrentUser(Some(user_id)))
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Result<Option<&'a str>, ApiError> {
    let Some(value) = parts.headers.get(name) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| ApiError::BadRequest(format!("{name} header is not valid text")))?
        .trim();
    Ok((!value.is_empty()).then_some(value))
}
