mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rent::request::{BorrowRequest, RecordsOfUserRequest, ReturnRequest, Transformer};
use crate::route::rent::response::Presenter;
use application::service::{GetRentService, GetUserService, RentService, ReturnService};
use application::transfer::GetUserDto;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

pub trait RentRouter {
    fn route_rent(self) -> Self;
}

impl RentRouter for Router<AppModule> {
    fn route_rent(self) -> Self {
        self.route(
            "/borrow",
            post(
                |State(module): State<AppModule>, Json(req): Json<BorrowRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| module.database().rent_book(dto))
                        .await
                        .map(|record| (StatusCode::CREATED, record))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrow/return/:borrow_id",
            post(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(ReturnRequest::new(id))
                        .handle(|dto| module.database().return_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrow/records",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| module.database().get_all_rents())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/borrow/records/user/:user_id",
            get(
                |State(module): State<AppModule>, Path(user_id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(RecordsOfUserRequest::new(user_id))
                        .handle(|dto| async move {
                            let user = module
                                .database()
                                .get_user(GetUserDto { id: dto.user_id })
                                .await?;
                            if user.is_none() {
                                return Err(Report::new(KernelError::UserNotFound)
                                    .attach_printable(format!("user_id: {}", dto.user_id)));
                            }
                            module.database().get_rents_from_user(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
