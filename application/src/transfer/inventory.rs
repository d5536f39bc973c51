use kernel::prelude::entity::{DestructInventory, Inventory, Titled};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDto {
    pub isbn: String,
    pub stock_quantity: i32,
    pub book_title: Option<String>,
}

impl From<Titled<Inventory>> for InventoryDto {
    fn from(value: Titled<Inventory>) -> Self {
        let (inventory, book_title) = value.into_parts();
        let DestructInventory { isbn, stock } = inventory.into_destruct();
        Self {
            isbn: isbn.into(),
            stock_quantity: stock.into(),
            book_title: book_title.map(Into::into),
        }
    }
}

/// Stock is carried wide so out-of-range input is rejected by validation
/// rather than by the caller's parser.
pub struct SetStockDto {
    pub isbn: String,
    pub stock_quantity: i64,
}
