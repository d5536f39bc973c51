use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{GetInventoryService, SetStockService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait InventoryRouter {
    fn route_inventory(self) -> Self;
}

impl InventoryRouter for Router<AppModule> {
    fn route_inventory(self) -> Self {
        self.route(
            "/inventory",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_inventory())
                    .await
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<SetStockRequest>, ErrorStatus>| async move {
                    Controller::new(Transformer, Presenter)
                        .handle(req, |dto| module.database().set_stock(dto))
                        .await
                },
            ),
        )
    }
}
