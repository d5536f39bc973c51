use sqlx::{Executor, SqliteConnection};

use kernel::interface::update::StoreModifier;
use kernel::KernelError;

use crate::error::ConvertError;

const DROP_TABLES: &str = include_str!("sql/drop.sql");
const SCHEMA: &str = include_str!("sql/schema.sql");
const SEED: &str = include_str!("sql/seed.sql");

pub struct SqliteStoreRepository;

#[async_trait::async_trait]
impl StoreModifier<SqliteConnection> for SqliteStoreRepository {
    async fn reset(&self, con: &mut SqliteConnection) -> error_stack::Result<(), KernelError> {
        SqliteStoreInternal::reset(con).await
    }

    async fn initialize(&self, con: &mut SqliteConnection) -> error_stack::Result<bool, KernelError> {
        SqliteStoreInternal::initialize(con).await
    }
}

pub(in crate::database) struct SqliteStoreInternal;

impl SqliteStoreInternal {
    async fn reset(con: &mut SqliteConnection) -> error_stack::Result<(), KernelError> {
        (&mut *con).execute(DROP_TABLES).await.convert_error()?;
        (&mut *con).execute(SCHEMA).await.convert_error()?;
        (&mut *con).execute(SEED).await.convert_error()?;
        tracing::info!("store reset to seed data");
        Ok(())
    }

    async fn initialize(con: &mut SqliteConnection) -> error_stack::Result<bool, KernelError> {
        (&mut *con).execute(SCHEMA).await.convert_error()?;
        // language=sqlite
        let (books,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM book")
            .fetch_one(&mut *con)
            .await
            .convert_error()?;
        if books > 0 {
            tracing::debug!("store already holds {books} books, skipping seed");
            return Ok(false);
        }
        (&mut *con).execute(SEED).await.convert_error()?;
        tracing::info!("seeded empty store");
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{BookQuery, InventoryQuery, OrderQuery};
    use kernel::interface::update::{InventoryModifier, OrderModifier, StoreModifier};
    use kernel::prelude::entity::{
        CustomerId, Isbn, ItemQuantity, Order, OrderDate, OrderId, OrderTotal, StockQuantity,
    };
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::{
        SqliteBookRepository, SqliteDatabase, SqliteInventoryRepository, SqliteOrderRepository,
        SqliteStoreRepository,
    };

    #[tokio::test]
    async fn reset_restores_seed_snapshot() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let isbn = Isbn::new("9780000000001");

        let mut transaction = db.transact().await?;
        SqliteInventoryRepository
            .decrement(&mut *transaction, &isbn, &ItemQuantity::new(5))
            .await?;
        transaction.commit().await?;

        let mut transaction = db.transact().await?;
        SqliteStoreRepository.reset(&mut *transaction).await?;
        transaction.commit().await?;

        let mut con = db.connect().await?;
        let first = SqliteInventoryRepository.find_all(&mut *con).await?;
        let orders = SqliteOrderRepository.find_all(&mut *con).await?;
        drop(con);

        let mut transaction = db.transact().await?;
        SqliteStoreRepository.reset(&mut *transaction).await?;
        transaction.commit().await?;

        let mut con = db.connect().await?;
        assert_eq!(SqliteInventoryRepository.find_all(&mut *con).await?, first);
        assert_eq!(SqliteOrderRepository.find_all(&mut *con).await?, orders);
        let stock = SqliteInventoryRepository
            .find_by_isbn(&mut *con, &isbn)
            .await?
            .expect("seeded inventory");
        assert_eq!(stock.stock(), &StockQuantity::new(40));
        Ok(())
    }

    #[tokio::test]
    async fn initialize_seeds_only_once() -> error_stack::Result<(), KernelError> {
        let path = std::env::temp_dir().join(format!("bookstore-{}.db", uuid::Uuid::new_v4()));
        let db = SqliteDatabase::open(path).await?;

        let mut transaction = db.transact().await?;
        assert!(SqliteStoreRepository.initialize(&mut *transaction).await?);
        transaction.commit().await?;

        let mut transaction = db.transact().await?;
        assert!(!SqliteStoreRepository.initialize(&mut *transaction).await?);
        transaction.commit().await?;

        let mut con = db.connect().await?;
        assert_eq!(SqliteBookRepository.find_all(&mut *con).await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_reset_keeps_prior_state() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let isbn = Isbn::new("9780000000002");
        let order_id = OrderId::new(uuid::Uuid::new_v4().to_string());

        let mut transaction = db.transact().await?;
        SqliteOrderRepository
            .create(
                &mut *transaction,
                &Order::new(
                    order_id.clone(),
                    CustomerId::new("C004"),
                    OrderDate::today(),
                    OrderTotal::new(rust_decimal_macros::dec!(16.50)),
                ),
            )
            .await?;
        assert!(SqliteInventoryRepository
            .decrement(&mut *transaction, &isbn, &ItemQuantity::new(3))
            .await?);
        transaction.commit().await?;

        let mut con = db.connect().await?;
        let orders = SqliteOrderRepository.find_all(&mut *con).await?;
        let inventory = SqliteInventoryRepository.find_all(&mut *con).await?;
        drop(con);
        assert_eq!(orders.len(), 4);

        let mut transaction = db.transact().await?;
        SqliteStoreRepository.reset(&mut *transaction).await?;
        let inside = SqliteInventoryRepository
            .find_by_isbn(&mut *transaction, &isbn)
            .await?
            .expect("seeded inventory");
        assert_eq!(inside.stock(), &StockQuantity::new(25));
        assert!(SqliteOrderRepository
            .find_by_id(&mut *transaction, &order_id)
            .await?
            .is_none());
        transaction.roll_back().await?;

        let mut con = db.connect().await?;
        assert_eq!(SqliteOrderRepository.find_all(&mut *con).await?, orders);
        assert_eq!(SqliteInventoryRepository.find_all(&mut *con).await?, inventory);
        let stock = SqliteInventoryRepository
            .find_by_isbn(&mut *con, &isbn)
            .await?
            .expect("inventory record");
        assert_eq!(stock.stock(), &StockQuantity::new(22));
        Ok(())
    }
}
