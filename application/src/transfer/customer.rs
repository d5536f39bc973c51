use kernel::prelude::entity::{Customer, DestructCustomer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        let DestructCustomer {
            id,
            name,
            address,
            email,
            phone,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
