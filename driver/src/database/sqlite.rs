use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use error_stack::Report;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqliteConnection};
use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAnalyticsQuery, DependOnAuthorQuery, DependOnBookQuery, DependOnCustomerQuery,
    DependOnInventoryQuery, DependOnOrderItemQuery, DependOnOrderQuery,
};
use kernel::interface::update::{
    DependOnInventoryModifier, DependOnOrderItemModifier, DependOnOrderModifier,
    DependOnStoreModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{
    analytics::*, author::*, book::*, customer::*, inventory::*, order::*, order_item::*, store::*,
};

mod analytics;
mod author;
mod book;
mod customer;
mod inventory;
mod order;
mod order_item;
mod store;

static DATABASE_URL: &str = "DATABASE_URL";

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MONEY_SCALE: u32 = 2;

/// The record store: a single SQLite file shared by every request.
///
/// SQLite allows one writer per file. Units of work queue on `write_gate` before they take a
/// pooled connection, so a waiting writer never holds a connection a reader could use.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
    write_gate: Arc<Mutex<()>>,
}

impl SqliteDatabase {
    /// Opens the store named by `DATABASE_URL`, e.g. `sqlite://bookstore.db`.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(DATABASE_URL)?;
        let options = SqliteConnectOptions::from_str(&url)
            .convert_error()
            .map_err(|report| report.attach_printable(format!("invalid {DATABASE_URL}: {url}")))?;
        Self::connect_with(options).await
    }

    pub async fn open(path: impl AsRef<Path>) -> error_stack::Result<Self, KernelError> {
        Self::connect_with(SqliteConnectOptions::new().filename(path)).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> error_stack::Result<Self, KernelError> {
        let options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .convert_error()?;
        tracing::debug!("connected to sqlite store");
        Ok(Self {
            pool,
            write_gate: Arc::new(Mutex::new(())),
        })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for SqliteDatabase {
    type Executor = SqliteConnection;
    type Connection = PoolConnection<Sqlite>;
    type Transaction = SqliteTransaction;

    async fn connect(&self) -> error_stack::Result<Self::Connection, KernelError> {
        self.pool.acquire().await.convert_error()
    }

    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let gate = Arc::clone(&self.write_gate).lock_owned().await;
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(SqliteTransaction {
            transaction,
            _gate: gate,
        })
    }
}

/// A unit of work. Dropping it without committing rolls the changes back.
pub struct SqliteTransaction {
    transaction: sqlx::Transaction<'static, Sqlite>,
    _gate: OwnedMutexGuard<()>,
}

#[async_trait::async_trait]
impl Transaction for SqliteTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.transaction.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.transaction.rollback().await.convert_error()
    }
}

impl Deref for SqliteTransaction {
    type Target = SqliteConnection;
    fn deref(&self) -> &Self::Target {
        &self.transaction
    }
}

impl DerefMut for SqliteTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.transaction
    }
}

impl DependOnBookQuery for SqliteDatabase {
    type BookQuery = SqliteBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &SqliteBookRepository
    }
}

impl DependOnAuthorQuery for SqliteDatabase {
    type AuthorQuery = SqliteAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &SqliteAuthorRepository
    }
}

impl DependOnCustomerQuery for SqliteDatabase {
    type CustomerQuery = SqliteCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &SqliteCustomerRepository
    }
}

impl DependOnOrderQuery for SqliteDatabase {
    type OrderQuery = SqliteOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &SqliteOrderRepository
    }
}

impl DependOnOrderModifier for SqliteDatabase {
    type OrderModifier = SqliteOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &SqliteOrderRepository
    }
}

impl DependOnOrderItemQuery for SqliteDatabase {
    type OrderItemQuery = SqliteOrderItemRepository;
    fn order_item_query(&self) -> &Self::OrderItemQuery {
        &SqliteOrderItemRepository
    }
}

impl DependOnOrderItemModifier for SqliteDatabase {
    type OrderItemModifier = SqliteOrderItemRepository;
    fn order_item_modifier(&self) -> &Self::OrderItemModifier {
        &SqliteOrderItemRepository
    }
}

impl DependOnInventoryQuery for SqliteDatabase {
    type InventoryQuery = SqliteInventoryRepository;
    fn inventory_query(&self) -> &Self::InventoryQuery {
        &SqliteInventoryRepository
    }
}

impl DependOnInventoryModifier for SqliteDatabase {
    type InventoryModifier = SqliteInventoryRepository;
    fn inventory_modifier(&self) -> &Self::InventoryModifier {
        &SqliteInventoryRepository
    }
}

impl DependOnAnalyticsQuery for SqliteDatabase {
    type AnalyticsQuery = SqliteAnalyticsRepository;
    fn analytics_query(&self) -> &Self::AnalyticsQuery {
        &SqliteAnalyticsRepository
    }
}

impl DependOnStoreModifier for SqliteDatabase {
    type StoreModifier = SqliteStoreRepository;
    fn store_modifier(&self) -> &Self::StoreModifier {
        &SqliteStoreRepository
    }
}

// Money is stored as REAL; values are rounded back to cents on the way out.
pub(in crate::database) fn decimal_from_real(value: f64) -> error_stack::Result<Decimal, KernelError> {
    Decimal::try_from(value)
        .convert_error()
        .map(|decimal| decimal.round_dp(MONEY_SCALE))
}

pub(in crate::database) fn real_from_decimal(value: &Decimal) -> error_stack::Result<f64, KernelError> {
    value.to_f64().ok_or_else(|| {
        Report::new(KernelError::Internal).attach_printable(format!("{value} does not fit a REAL"))
    })
}

#[cfg(test)]
pub(in crate::database) mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::update::StoreModifier;
    use kernel::KernelError;

    use super::{SqliteDatabase, SqliteStoreRepository};

    /// A freshly seeded store in its own file under the system temp directory.
    pub async fn seeded_database() -> error_stack::Result<SqliteDatabase, KernelError> {
        let path = std::env::temp_dir().join(format!("bookstore-{}.db", uuid::Uuid::new_v4()));
        let db = SqliteDatabase::open(path).await?;
        let mut transaction = db.transact().await?;
        SqliteStoreRepository.reset(&mut *transaction).await?;
        transaction.commit().await?;
        Ok(db)
    }

    #[tokio::test]
    async fn money_survives_real_storage() -> error_stack::Result<(), KernelError> {
        use rust_decimal_macros::dec;

        let real = super::real_from_decimal(&dec!(24.99))?;
        assert_eq!(super::decimal_from_real(real)?, dec!(24.99));
        assert_eq!(super::decimal_from_real(0.1 + 0.2)?, dec!(0.30));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn transactions_take_turns() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let first = db.transact().await?;
        let waiting = {
            let db = db.clone();
            tokio::spawn(async move { db.transact().await.map(|_| ()) })
        };
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(!waiting.is_finished());
        first.roll_back().await?;
        waiting.await.expect("join")?;

        // reads do not queue behind the gate
        let _held = db.transact().await?;
        let _reader = db.connect().await?;
        Ok(())
    }
}
