use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{BookDemand, ProfitMargin, Titled};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AnalyticsQuery<Connection>: 'static + Sync + Send {
    async fn find_book_demand(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Titled<BookDemand>>, KernelError>;
    async fn find_profit_margins(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Titled<ProfitMargin>>, KernelError>;
}

pub trait DependOnAnalyticsQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AnalyticsQuery: AnalyticsQuery<Executor<Self>>;
    fn analytics_query(&self) -> &Self::AnalyticsQuery;
}
