use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use application::transfer::{
    CreateUserDto, DeactivateUserDto, DeleteUserDto, GetUserDto, UpdateUserDto,
};
use axum::http::StatusCode;
use email_address::EmailAddress;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    name: Option<String>,
    email: Option<String>,
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
pub struct DeactivateRequest {
    id: i64,
}

impl DeactivateRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

fn valid_email(email: String) -> Result<String, ErrorStatus> {
    if EmailAddress::is_valid(&email) {
        Ok(email)
    } else {
        tracing::debug!(email = %email, "rejected email address");
        Err(ErrorStatus::rejected(
            StatusCode::UNPROCESSABLE_ENTITY,
            "value is not a valid email address",
        ))
    }
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateUserDto;
    type Error = ErrorStatus;
    fn emit(&self, CreateRequest { name, email }: CreateRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateUserDto {
            name,
            email: valid_email(email)?,
        })
    }
}

impl TryIntake<(i64, UpdateRequest)> for Transformer {
    type To = UpdateUserDto;
    type Error = ErrorStatus;
    fn emit(&self, (id, req): (i64, UpdateRequest)) -> Result<Self::To, Self::Error> {
        Ok(UpdateUserDto {
            id,
            name: req.name,
            email: req.email.map(valid_email).transpose()?,
        })
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetUserDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetUserDto { id: input.id }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteUserDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteUserDto { id: input.id }
    }
}

impl Intake<DeactivateRequest> for Transformer {
    type To = DeactivateUserDto;
    fn emit(&self, input: DeactivateRequest) -> Self::To {
        DeactivateUserDto { id: input.id }
    }
}
