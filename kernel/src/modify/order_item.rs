use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::OrderItem;
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderItemModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        item: &OrderItem,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnOrderItemModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderItemModifier: OrderItemModifier<Executor<Self>>;
    fn order_item_modifier(&self) -> &Self::OrderItemModifier;
}
