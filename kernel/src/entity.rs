mod analytics;
mod author;
mod book;
mod catalog;
mod customer;
mod inventory;
mod order;
mod order_item;
mod view;

pub use self::{
    analytics::*, author::*, book::*, catalog::*, customer::*, inventory::*, order::*,
    order_item::*, view::*,
};
