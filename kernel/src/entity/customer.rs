mod contact;
mod id;
mod name;

pub use self::{contact::*, id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    address: CustomerAddress,
    email: CustomerEmail,
    phone: CustomerPhone,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: CustomerName,
        address: CustomerAddress,
        email: CustomerEmail,
        phone: CustomerPhone,
    ) -> Self {
        Self {
            id,
            name,
            address,
            email,
            phone,
        }
    }
}
