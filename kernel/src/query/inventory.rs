use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{Inventory, Isbn, Titled};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InventoryQuery<Connection>: 'static + Sync + Send {
    async fn find_by_isbn(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Inventory>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Titled<Inventory>>, KernelError>;
}

pub trait DependOnInventoryQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type InventoryQuery: InventoryQuery<Executor<Self>>;
    fn inventory_query(&self) -> &Self::InventoryQuery;
}
