use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::KernelError;

use crate::transfer::CustomerDto;

#[async_trait::async_trait]
pub trait GetCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    async fn get_customers(&self) -> error_stack::Result<Vec<CustomerDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let customers = self.customer_query().find_all(&mut *connection).await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }
}

impl<T> GetCustomerService for T where T: DependOnCustomerQuery {}
