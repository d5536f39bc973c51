use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{Inventory, Isbn, ItemQuantity};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InventoryModifier<Connection>: 'static + Sync + Send {
    /// Atomically subtracts `quantity` from the stock of `isbn`, only if at least that much
    /// is on hand. Returns `false` and changes nothing when the stock is short or the book
    /// has no inventory record.
    async fn decrement(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
        quantity: &ItemQuantity,
    ) -> error_stack::Result<bool, KernelError>;

    /// Creates the record, or overwrites its stock unconditionally.
    async fn upsert(
        &self,
        con: &mut Connection,
        inventory: &Inventory,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnInventoryModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type InventoryModifier: InventoryModifier<Executor<Self>>;
    fn inventory_modifier(&self) -> &Self::InventoryModifier;
}
