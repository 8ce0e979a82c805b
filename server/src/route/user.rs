mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::user::request::{
    CreateRequest, DeactivateRequest, DeleteRequest, GetRequest, Transformer, UpdateRequest,
};
use crate::route::user::response::Presenter;
use application::service::{
    CreateUserService, DeactivateUserService, DeleteUserService, GetUserService,
    UpdateUserService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

fn user_not_found(id: i64) -> ErrorStatus {
    ErrorStatus::from(
        Report::new(KernelError::UserNotFound).attach_printable(format!("user_id: {id}")),
    )
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| module.database().get_all_users())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().create_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| module.database().get_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| user_not_found(id)))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<i64>,
                 Json(req): Json<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((id, req))?
                        .handle(|dto| module.database().update_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| user_not_found(id)))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| module.database().delete_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or_else(|| user_not_found(id)))
                },
            ),
        )
        .route(
            "/users/:id/deactivate",
            patch(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeactivateRequest::new(id))
                        .handle(|dto| module.database().deactivate_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| {
                            res.ok_or_else(|| {
                                ErrorStatus::rejected(
                                    StatusCode::BAD_REQUEST,
                                    "User not found or already deactivated",
                                )
                            })
                        })
                },
            ),
        )
    }
}
