use crate::controller::Exhaust;
use application::transfer::RentDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;

/// Dates are written as `YYYY-MM-DD`.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    id: i64,
    user_id: i64,
    book_id: i64,
    borrow_date: Date,
    return_date: Option<Date>,
}

impl From<RentDto> for RecordResponse {
    fn from(value: RentDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            book_id: value.book_id,
            borrow_date: value.borrow_date,
            return_date: value.return_date,
        }
    }
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<RentDto> for Presenter {
    type To = RecordResponse;
    fn emit(&self, input: RentDto) -> Self::To {
        RecordResponse::from(input)
    }
}

impl Exhaust<Vec<RentDto>> for Presenter {
    type To = Json<Vec<RecordResponse>>;
    fn emit(&self, input: Vec<RentDto>) -> Self::To {
        Json(input.into_iter().map(RecordResponse::from).collect())
    }
}
