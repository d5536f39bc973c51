use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct CustomerAddress(String);

impl CustomerAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct CustomerPhone(String);

impl CustomerPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
