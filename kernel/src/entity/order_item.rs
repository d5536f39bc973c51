mod id;
mod quantity;

pub use self::{id::*, quantity::*};
use crate::entity::{BookPrice, Isbn, OrderId};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    isbn: Isbn,
    quantity: ItemQuantity,
    price: BookPrice,
}

impl OrderItem {
    pub fn new(
        id: OrderItemId,
        order_id: OrderId,
        isbn: Isbn,
        quantity: ItemQuantity,
        price: BookPrice,
    ) -> Self {
        Self {
            id,
            order_id,
            isbn,
            quantity,
            price,
        }
    }
}
