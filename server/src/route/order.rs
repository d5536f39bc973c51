use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{GetOrderItemService, GetOrderService, PlaceOrderService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait OrderRouter {
    fn route_order(self) -> Self;
}

impl OrderRouter for Router<AppModule> {
    fn route_order(self) -> Self {
        self.route(
            "/orders",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_orders())
                    .await
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<PlaceOrderRequest>, ErrorStatus>| async move {
                    Controller::new(Transformer, Presenter)
                        .handle(req, |dto| module.database().place_order(dto))
                        .await
                },
            ),
        )
        .route(
            "/orders/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(Transformer, Presenter)
                        .handle(GetOrderRequest::new(id), |dto| module.database().get_order(dto))
                        .await
                },
            ),
        )
        .route(
            "/order-items",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_order_items())
                    .await
            }),
        )
    }
}
