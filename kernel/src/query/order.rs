use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{OrderId, OrderView};
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderQuery<Connection>: 'static + Sync + Send {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &OrderId,
    ) -> error_stack::Result<Option<OrderView>, KernelError>;
    async fn find_all(&self, con: &mut Connection)
        -> error_stack::Result<Vec<OrderView>, KernelError>;
}

pub trait DependOnOrderQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderQuery: OrderQuery<Executor<Self>>;
    fn order_query(&self) -> &Self::OrderQuery;
}
