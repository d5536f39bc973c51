mod inventory;
mod order;
mod order_item;
mod store;

pub use self::{inventory::*, order::*, order_item::*, store::*};
