use rust_decimal::Decimal;
use vodca::{AsRefln, Fromln};

use crate::entity::ItemQuantity;

/// Unit price of a book. Also used as the price snapshot stored on an order line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPrice(Decimal);

impl BookPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    pub fn line_total(&self, quantity: &ItemQuantity) -> Decimal {
        self.0 * Decimal::from(i32::from(*quantity))
    }
}
