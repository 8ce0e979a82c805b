use crate::controller::Intake;
use application::transfer::{
    ChangeBookAvailabilityDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: String,
    author: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug)]
pub struct GetRequest {
    id: i64,
}

impl GetRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteRequest {
    id: i64,
}

impl DeleteRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct AvailabilityRequest {
    id: i64,
}

impl AvailabilityRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<CreateRequest> for Transformer {
    type To = CreateBookDto;
    fn emit(&self, CreateRequest { title, author }: CreateRequest) -> Self::To {
        CreateBookDto { title, author }
    }
}

impl Intake<(i64, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    fn emit(&self, (id, req): (i64, UpdateRequest)) -> Self::To {
        UpdateBookDto {
            id,
            title: req.title,
            author: req.author,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<AvailabilityRequest> for Transformer {
    type To = ChangeBookAvailabilityDto;
    fn emit(&self, input: AvailabilityRequest) -> Self::To {
        ChangeBookAvailabilityDto { id: input.id }
    }
}
