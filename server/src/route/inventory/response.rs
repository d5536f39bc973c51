use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::InventoryDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSetResponse {
    isbn: String,
    stock_quantity: i32,
}

impl IntoResponse for StockSetResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryResponse {
    #[serde(rename = "ISBN")]
    isbn: String,
    book_title: Option<String>,
    stock_quantity: i32,
}

pub struct Presenter;

impl Exhaust<InventoryDto> for Presenter {
    type To = StockSetResponse;
    fn emit(&self, input: InventoryDto) -> Self::To {
        StockSetResponse {
            isbn: input.isbn,
            stock_quantity: input.stock_quantity,
        }
    }
}

impl Exhaust<Vec<InventoryDto>> for Presenter {
    type To = Json<Vec<InventoryResponse>>;
    fn emit(&self, input: Vec<InventoryDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(|record| InventoryResponse {
                    isbn: record.isbn,
                    book_title: record.book_title,
                    stock_quantity: record.stock_quantity,
                })
                .collect(),
        )
    }
}
