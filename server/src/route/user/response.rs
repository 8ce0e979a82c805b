use crate::controller::Exhaust;
use application::transfer::UserDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: i64,
    name: String,
    email: String,
    is_active: bool,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            is_active: value.is_active,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct CreatedResponse(UserResponse);

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<UserDto> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        CreatedResponse(UserResponse::from(input))
    }
}

impl Exhaust<Option<UserDto>> for Presenter {
    type To = Option<UserResponse>;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        input.map(UserResponse::from)
    }
}

impl Exhaust<Vec<UserDto>> for Presenter {
    type To = Json<Vec<UserResponse>>;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        Json(input.into_iter().map(UserResponse::from).collect())
    }
}

/// `None` when nothing was deleted.
impl Exhaust<bool> for Presenter {
    type To = Option<StatusCode>;
    fn emit(&self, input: bool) -> Self::To {
        input.then_some(StatusCode::NO_CONTENT)
    }
}
