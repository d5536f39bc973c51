use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::{BookDemandDto, ProfitMarginDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookDemandResponse {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "ISBN")]
    isbn: String,
    book_title: Option<String>,
    popularity: i32,
}

impl From<BookDemandDto> for BookDemandResponse {
    fn from(value: BookDemandDto) -> Self {
        Self {
            id: value.id,
            isbn: value.isbn,
            book_title: value.book_title,
            popularity: value.popularity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfitMarginResponse {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "ISBN")]
    isbn: String,
    book_title: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    sales_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    cost_total: Decimal,
}

impl From<ProfitMarginDto> for ProfitMarginResponse {
    fn from(value: ProfitMarginDto) -> Self {
        Self {
            id: value.id,
            isbn: value.isbn,
            book_title: value.book_title,
            sales_total: value.sales_total,
            cost_total: value.cost_total,
        }
    }
}

pub struct Presenter;

impl Exhaust<Vec<BookDemandDto>> for Presenter {
    type To = Json<Vec<BookDemandResponse>>;
    fn emit(&self, input: Vec<BookDemandDto>) -> Self::To {
        Json(input.into_iter().map(BookDemandResponse::from).collect())
    }
}

impl Exhaust<Vec<ProfitMarginDto>> for Presenter {
    type To = Json<Vec<ProfitMarginResponse>>;
    fn emit(&self, input: Vec<ProfitMarginDto>) -> Self::To {
        Json(input.into_iter().map(ProfitMarginResponse::from).collect())
    }
}
