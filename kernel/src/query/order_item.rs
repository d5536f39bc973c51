use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{OrderId, OrderItem, Titled};
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderItemQuery<Connection>: 'static + Sync + Send {
    async fn find_by_order_id(
        &self,
        con: &mut Connection,
        order_id: &OrderId,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError>;
}

pub trait DependOnOrderItemQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderItemQuery: OrderItemQuery<Executor<Self>>;
    fn order_item_query(&self) -> &Self::OrderItemQuery;
}
