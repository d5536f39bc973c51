use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{Customer, CustomerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerQuery<Connection>: 'static + Sync + Send {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError>;
    async fn find_all(&self, con: &mut Connection)
        -> error_stack::Result<Vec<Customer>, KernelError>;
}

pub trait DependOnCustomerQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CustomerQuery: CustomerQuery<Executor<Self>>;
    fn customer_query(&self) -> &Self::CustomerQuery;
}
