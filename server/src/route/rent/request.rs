use crate::controller::Intake;
use application::transfer::{CreateRentDto, GetRentFromUserIdDto, ReturnRentDto};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BorrowRequest {
    user_id: i64,
    book_id: i64,
}

#[derive(Debug)]
pub struct ReturnRequest {
    id: i64,
}

impl ReturnRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RecordsOfUserRequest {
    user_id: i64,
}

impl RecordsOfUserRequest {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

pub struct Transformer;

impl Intake<BorrowRequest> for Transformer {
    type To = CreateRentDto;
    fn emit(&self, BorrowRequest { user_id, book_id }: BorrowRequest) -> Self::To {
        CreateRentDto { user_id, book_id }
    }
}

impl Intake<ReturnRequest> for Transformer {
    type To = ReturnRentDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        ReturnRentDto { id: input.id }
    }
}

impl Intake<RecordsOfUserRequest> for Transformer {
    type To = GetRentFromUserIdDto;
    fn emit(&self, input: RecordsOfUserRequest) -> Self::To {
        GetRentFromUserIdDto {
            user_id: input.user_id,
        }
    }
}
