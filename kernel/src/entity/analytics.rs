use destructure::Destructure;
use rust_decimal::Decimal;
use vodca::{AsRefln, Fromln, References};

use crate::entity::Isbn;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct DemandId(String);

impl DemandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct Popularity(i32);

impl Popularity {
    pub fn new(popularity: impl Into<i32>) -> Self {
        Self(popularity.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDemand {
    id: DemandId,
    isbn: Isbn,
    popularity: Popularity,
}

impl BookDemand {
    pub fn new(id: DemandId, isbn: Isbn, popularity: Popularity) -> Self {
        Self {
            id,
            isbn,
            popularity,
        }
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct MarginId(String);

impl MarginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct SalesTotal(Decimal);

impl SalesTotal {
    pub fn new(total: impl Into<Decimal>) -> Self {
        Self(total.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct CostTotal(Decimal);

impl CostTotal {
    pub fn new(total: impl Into<Decimal>) -> Self {
        Self(total.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct ProfitMargin {
    id: MarginId,
    isbn: Isbn,
    sales_total: SalesTotal,
    cost_total: CostTotal,
}

impl ProfitMargin {
    pub fn new(id: MarginId, isbn: Isbn, sales_total: SalesTotal, cost_total: CostTotal) -> Self {
        Self {
            id,
            isbn,
            sales_total,
            cost_total,
        }
    }
}
