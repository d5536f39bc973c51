use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use application::service::GetCustomerService;
use application::transfer::CustomerDto;

use crate::controller::{Controller, Exhaust};
use crate::handler::AppModule;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerResponse {
    #[serde(rename = "CustomerID")]
    customer_id: String,
    name: String,
    address: String,
    email: String,
    phone_number: String,
}

pub struct Presenter;

impl Exhaust<Vec<CustomerDto>> for Presenter {
    type To = Json<Vec<CustomerResponse>>;
    fn emit(&self, input: Vec<CustomerDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(|customer| CustomerResponse {
                    customer_id: customer.id,
                    name: customer.name,
                    address: customer.address,
                    email: customer.email,
                    phone_number: customer.phone,
                })
                .collect(),
        )
    }
}

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/customers",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_customers())
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
    async fn lists_customers() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let customers: Value = reqwest::get(format!("{base}/api/customers"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        assert_eq!(customers.as_array().map(Vec::len), Some(4));
        assert_eq!(
            customers[0],
            json!({
                "CustomerID": "C001",
                "Name": "Alice Moreau",
                "Address": "31 Linden Row, Boston, MA",
                "Email": "alice.moreau@example.com",
                "PhoneNumber": "555-0101"
            })
        );
        Ok(())
    }
}
