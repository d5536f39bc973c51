use crate::database::{DependOnDatabaseConnection, Executor};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StoreModifier<Connection>: 'static + Sync + Send {
    /// Drops every table, recreates the schema and loads the seed rows.
    async fn reset(&self, con: &mut Connection) -> error_stack::Result<(), KernelError>;

    /// Creates missing tables and seeds an empty store. Returns whether seed rows were loaded.
    async fn initialize(&self, con: &mut Connection) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnStoreModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type StoreModifier: StoreModifier<Executor<Self>>;
    fn store_modifier(&self) -> &Self::StoreModifier;
}
