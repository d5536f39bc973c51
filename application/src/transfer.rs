mod analytics;
mod author;
mod book;
mod customer;
mod inventory;
mod order;

pub use self::{analytics::*, author::*, book::*, customer::*, inventory::*, order::*};
