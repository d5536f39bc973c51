use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::{OrderDetailDto, OrderDto, OrderItemDto, PlacedOrderDto};

use crate::controller::Exhaust;
use crate::error::not_found;

/// Body of `201` from `POST /orders`.
///
/// `orderTotal` is extra to `{orderId, message}`. It is the sum of the catalog prices
/// charged, which can differ from the prices the client quoted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrderResponse {
    order_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    order_total: Decimal,
    message: &'static str,
}

impl IntoResponse for PlacedOrderResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderResponse {
    #[serde(rename = "OrderID")]
    order_id: String,
    #[serde(rename = "CustomerID")]
    customer_id: String,
    customer_name: Option<String>,
    order_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    order_total: Decimal,
}

impl From<OrderDto> for OrderResponse {
    fn from(value: OrderDto) -> Self {
        Self {
            order_id: value.id,
            customer_id: value.customer_id,
            customer_name: value.customer_name,
            order_date: value.date.to_string(),
            order_total: value.total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItemResponse {
    #[serde(rename = "OrderItemID")]
    order_item_id: String,
    #[serde(rename = "OrderID")]
    order_id: String,
    #[serde(rename = "ISBN")]
    isbn: String,
    book_title: Option<String>,
    quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
}

impl From<OrderItemDto> for OrderItemResponse {
    fn from(value: OrderItemDto) -> Self {
        Self {
            order_item_id: value.id,
            order_id: value.order_id,
            isbn: value.isbn,
            book_title: value.book_title,
            quantity: value.quantity,
            price: value.price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    order: OrderResponse,
    items: Vec<OrderItemResponse>,
}

pub struct Presenter;

impl Exhaust<PlacedOrderDto> for Presenter {
    type To = PlacedOrderResponse;
    fn emit(&self, input: PlacedOrderDto) -> Self::To {
        PlacedOrderResponse {
            order_id: input.order_id,
            order_total: input.order_total,
            message: "Order created successfully",
        }
    }
}

impl Exhaust<Vec<OrderDto>> for Presenter {
    type To = Json<Vec<OrderResponse>>;
    fn emit(&self, input: Vec<OrderDto>) -> Self::To {
        Json(input.into_iter().map(OrderResponse::from).collect())
    }
}

impl Exhaust<Option<OrderDetailDto>> for Presenter {
    type To = Response;
    fn emit(&self, input: Option<OrderDetailDto>) -> Self::To {
        match input {
            Some(detail) => Json(OrderDetailResponse {
                order: OrderResponse::from(detail.order),
                items: detail
                    .items
                    .into_iter()
                    .map(OrderItemResponse::from)
                    .collect(),
            })
            .into_response(),
            None => not_found("Order"),
        }
    }
}

impl Exhaust<Vec<OrderItemDto>> for Presenter {
    type To = Json<Vec<OrderItemResponse>>;
    fn emit(&self, input: Vec<OrderItemDto>) -> Self::To {
        Json(input.into_iter().map(OrderItemResponse::from).collect())
    }
}
