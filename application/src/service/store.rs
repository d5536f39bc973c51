use kernel::interface::database::DatabaseConnection;
use kernel::interface::update::{DependOnStoreModifier, StoreModifier};
use kernel::KernelError;

use crate::service::settle;

#[async_trait::async_trait]
pub trait ResetStoreService: 'static + Sync + Send + DependOnStoreModifier {
    /// Drops everything and reloads the seed data. Holds the write section throughout,
    /// so no order or stock update can observe a half-built store.
    async fn reset_store(&self) -> error_stack::Result<(), KernelError> {
        let mut transaction = self.database_connection().transact().await?;
        let reset = self.store_modifier().reset(&mut *transaction).await;
        settle(transaction, reset).await
    }

    async fn initialize_store(&self) -> error_stack::Result<bool, KernelError> {
        let mut transaction = self.database_connection().transact().await?;
        let seeded = self.store_modifier().initialize(&mut *transaction).await;
        settle(transaction, seeded).await
    }
}

impl<T> ResetStoreService for T where T: DependOnStoreModifier {}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use kernel::KernelError;

    use crate::service::test::seeded_store;
    use crate::service::{
        GetAnalyticsService, GetAuthorService, GetBookService, GetCustomerService,
        GetInventoryService, GetOrderItemService, GetOrderService, PlaceOrderService,
        ResetStoreService,
    };
    use crate::transfer::{OrderLineDto, PlaceOrderDto};

    #[tokio::test]
    async fn reset_twice_yields_same_snapshot() -> error_stack::Result<(), KernelError> {
        let db = seeded_store().await?;
        db.place_order(PlaceOrderDto {
            customer_id: "C004".to_string(),
            items: vec![OrderLineDto {
                isbn: "9780000000005".to_string(),
                quantity: 2,
                price: dec!(27.00),
            }],
        })
        .await?;

        db.reset_store().await?;
        let first = (
            db.get_books().await?,
            db.get_authors().await?,
            db.get_customers().await?,
            db.get_orders().await?,
            db.get_order_items().await?,
            db.get_inventory().await?,
            db.get_book_demand().await?,
            db.get_profit_margins().await?,
        );
        db.reset_store().await?;
        let second = (
            db.get_books().await?,
            db.get_authors().await?,
            db.get_customers().await?,
            db.get_orders().await?,
            db.get_order_items().await?,
            db.get_inventory().await?,
            db.get_book_demand().await?,
            db.get_profit_margins().await?,
        );
        assert_eq!(first, second);
        assert_eq!(first.3.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn initialize_keeps_existing_data() -> error_stack::Result<(), KernelError> {
        let db = seeded_store().await?;
        db.place_order(PlaceOrderDto {
            customer_id: "C001".to_string(),
            items: vec![OrderLineDto {
                isbn: "9780000000001".to_string(),
                quantity: 1,
                price: dec!(10.00),
            }],
        })
        .await?;

        assert!(!db.initialize_store().await?);
        assert_eq!(db.get_orders().await?.len(), 4);
        Ok(())
    }
}
