use rust_decimal::Decimal;

use kernel::prelude::entity::{BookDemand, DestructBookDemand, DestructProfitMargin, ProfitMargin, Titled};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDemandDto {
    pub id: String,
    pub isbn: String,
    pub book_title: Option<String>,
    pub popularity: i32,
}

impl From<Titled<BookDemand>> for BookDemandDto {
    fn from(value: Titled<BookDemand>) -> Self {
        let (demand, book_title) = value.into_parts();
        let DestructBookDemand {
            id,
            isbn,
            popularity,
        } = demand.into_destruct();
        Self {
            id: id.into(),
            isbn: isbn.into(),
            book_title: book_title.map(Into::into),
            popularity: popularity.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitMarginDto {
    pub id: String,
    pub isbn: String,
    pub book_title: Option<String>,
    pub sales_total: Decimal,
    pub cost_total: Decimal,
}

impl From<Titled<ProfitMargin>> for ProfitMarginDto {
    fn from(value: Titled<ProfitMargin>) -> Self {
        let (margin, book_title) = value.into_parts();
        let DestructProfitMargin {
            id,
            isbn,
            sales_total,
            cost_total,
        } = margin.into_destruct();
        Self {
            id: id.into(),
            isbn: isbn.into(),
            book_title: book_title.map(Into::into),
            sales_total: sales_total.into(),
            cost_total: cost_total.into(),
        }
    }
}
