use rust_decimal::Decimal;
use serde::Deserialize;

use application::transfer::{GetOrderDto, OrderLineDto, PlaceOrderDto};

use crate::controller::Intake;

/// Accepts both the camelCase names and the dashboard's column names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(alias = "CustomerID")]
    customer_id: String,
    #[serde(alias = "Items")]
    items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    #[serde(alias = "ISBN")]
    isbn: String,
    #[serde(alias = "Quantity")]
    quantity: i64,
    #[serde(alias = "Price")]
    price: Decimal,
}

#[derive(Debug)]
pub struct GetOrderRequest {
    id: String,
}

impl GetOrderRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<PlaceOrderRequest> for Transformer {
    type To = PlaceOrderDto;
    fn emit(&self, input: PlaceOrderRequest) -> Self::To {
        PlaceOrderDto {
            customer_id: input.customer_id,
            items: input
                .items
                .into_iter()
                .map(|line| OrderLineDto {
                    isbn: line.isbn,
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
        }
    }
}

impl Intake<GetOrderRequest> for Transformer {
    type To = GetOrderDto;
    fn emit(&self, input: GetOrderRequest) -> Self::To {
        GetOrderDto { id: input.id }
    }
}
