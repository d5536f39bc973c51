mod date;
mod id;
mod total;

pub use self::{date::*, id::*, total::*};
use crate::entity::CustomerId;
use destructure::Destructure;
use vodca::References;

/// A placed order. Written once together with its items and never updated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    date: OrderDate,
    total: OrderTotal,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, date: OrderDate, total: OrderTotal) -> Self {
        Self {
            id,
            customer_id,
            date,
            total,
        }
    }
}
