use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{AnalyticsQuery, DependOnAnalyticsQuery};
use kernel::KernelError;

use crate::transfer::{BookDemandDto, ProfitMarginDto};

#[async_trait::async_trait]
pub trait GetAnalyticsService: 'static + Sync + Send + DependOnAnalyticsQuery {
    async fn get_book_demand(&self) -> error_stack::Result<Vec<BookDemandDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let demand = self
            .analytics_query()
            .find_book_demand(&mut *connection)
            .await?;
        Ok(demand.into_iter().map(BookDemandDto::from).collect())
    }

    async fn get_profit_margins(&self) -> error_stack::Result<Vec<ProfitMarginDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let margins = self
            .analytics_query()
            .find_profit_margins(&mut *connection)
            .await?;
        Ok(margins.into_iter().map(ProfitMarginDto::from).collect())
    }
}

impl<T> GetAnalyticsService for T where T: DependOnAnalyticsQuery {}
