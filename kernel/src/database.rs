use std::ops::DerefMut;

use crate::KernelError;

/// Entry point to the record store.
///
/// `connect` hands out a plain connection for reads. `transact` opens a unit of work that
/// holds the store's write section until it is committed or rolled back, so at most one
/// unit of work mutates the store at a time.
#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Executor: Send;
    type Connection: 'static + Send + DerefMut<Target = Self::Executor>;
    type Transaction: Transaction + DerefMut<Target = Self::Executor>;
    async fn connect(&self) -> error_stack::Result<Self::Connection, KernelError>;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

pub type Executor<T> =
    <<T as DependOnDatabaseConnection>::DatabaseConnection as DatabaseConnection>::Executor;

#[async_trait::async_trait]
pub trait Transaction: 'static + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
