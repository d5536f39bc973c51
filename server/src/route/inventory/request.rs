use serde::Deserialize;

use application::transfer::SetStockDto;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStockRequest {
    #[serde(alias = "ISBN")]
    isbn: String,
    #[serde(alias = "StockQuantity")]
    stock_quantity: i64,
}

pub struct Transformer;

impl Intake<SetStockRequest> for Transformer {
    type To = SetStockDto;
    fn emit(&self, input: SetStockRequest) -> Self::To {
        SetStockDto {
            isbn: input.isbn,
            stock_quantity: input.stock_quantity,
        }
    }
}
