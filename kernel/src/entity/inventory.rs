mod stock;

pub use self::stock::*;
use crate::entity::Isbn;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Inventory {
    isbn: Isbn,
    stock: StockQuantity,
}

impl Inventory {
    pub fn new(isbn: Isbn, stock: StockQuantity) -> Self {
        Self { isbn, stock }
    }
}
