use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct OrderItemId(String);

impl OrderItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
