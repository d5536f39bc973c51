mod analytics;
mod author;
mod book;
mod customer;
mod inventory;
mod order;
mod order_item;

pub use self::{analytics::*, author::*, book::*, customer::*, inventory::*, order::*, order_item::*};
