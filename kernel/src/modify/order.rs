use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::Order;
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderModifier<Connection>: 'static + Sync + Send {
    async fn create(&self, con: &mut Connection, order: &Order)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnOrderModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderModifier: OrderModifier<Executor<Self>>;
    fn order_modifier(&self) -> &Self::OrderModifier;
}
