use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use application::service::ResetStoreService;

use crate::controller::{Controller, Exhaust};
use crate::handler::AppModule;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    message: &'static str,
}

pub struct Presenter;

impl Exhaust<()> for Presenter {
    type To = Json<ResetResponse>;
    fn emit(&self, _: ()) -> Self::To {
        Json(ResetResponse {
            message: "Database reset successfully",
        })
    }
}

pub trait AdminRouter {
    fn route_admin(self) -> Self;
}

impl AdminRouter for Router<AppModule> {
    fn route_admin(self) -> Self {
        self.route(
            "/admin/reset",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().reset_store())
                    .await
            }),
        )
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use kernel::KernelError;

    use crate::route::test::spawn_server;

    #[tokio::test]
    async fn reset_restores_stock() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let client = reqwest::Client::new();

        let placed = client
            .post(format!("{base}/orders"))
            .json(&json!({
                "customerId": "C002",
                "items": [{ "isbn": "9780000000001", "quantity": 4, "price": 10.00 }]
            }))
            .send()
            .await
            .expect("request");
        assert_eq!(placed.status(), reqwest::StatusCode::CREATED);

        let response = client
            .post(format!("{base}/api/admin/reset"))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "message": "Database reset successfully" }));

        let inventory: Value = client
            .get(format!("{base}/inventory"))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        let shore = inventory
            .as_array()
            .and_then(|rows| rows.iter().find(|row| row["ISBN"] == json!("9780000000001")))
            .expect("inventory row");
        assert_eq!(shore["StockQuantity"], json!(40));

        let orders: Value = client
            .get(format!("{base}/orders"))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        assert_eq!(orders.as_array().map(Vec::len), Some(3));
        Ok(())
    }
}
