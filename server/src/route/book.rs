mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::request::{
    AvailabilityRequest, CreateRequest, DeleteRequest, GetRequest, Transformer, UpdateRequest,
};
use crate::route::book::response::Presenter;
use application::service::{
    ChangeBookAvailabilityService, CreateBookService, DeleteBookService, GetBookService,
    UpdateBookService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

fn book_not_found(id: i64) -> ErrorStatus {
    ErrorStatus::from(
        Report::new(KernelError::BookNotFound).attach_printable(format!("book_id: {id}")),
    )
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| module.database().get_all_books())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| module.database().create_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| module.database().get_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| book_not_found(id)))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<i64>,
                 Json(req): Json<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| module.database().update_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| book_not_found(id)))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| module.database().delete_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| book_not_found(id)))
                },
            ),
        )
        .route(
            "/books/:id/mark_unavailable",
            patch(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(AvailabilityRequest::new(id))
                        .handle(|dto| module.database().mark_book_unavailable(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| {
                            res.ok_or_else(|| {
                                ErrorStatus::rejected(
                                    StatusCode::BAD_REQUEST,
                                    "Book not found or already marked as unavailable",
                                )
                            })
                        })
                },
            ),
        )
        .route(
            "/books/:id/mark_available",
            patch(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(AvailabilityRequest::new(id))
                        .handle(|dto| module.database().mark_book_available(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| {
                            res.ok_or_else(|| {
                                ErrorStatus::rejected(
                                    StatusCode::BAD_REQUEST,
                                    "Book not found or already marked as available",
                                )
                            })
                        })
                },
            ),
        )
    }
}
