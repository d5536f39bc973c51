use kernel::interface::database::Transaction;
use kernel::KernelError;

mod analytics;
mod author;
mod book;
mod customer;
mod inventory;
mod order;
mod store;

pub use self::{
    analytics::*, author::*, book::*, customer::*, inventory::*, order::*, store::*,
};

/// Commits the unit of work when `result` is a success, and rolls it back otherwise.
/// A failed rollback is logged; the original error is the one returned.
async fn settle<T, R>(
    transaction: T,
    result: error_stack::Result<R, KernelError>,
) -> error_stack::Result<R, KernelError>
where
    T: Transaction,
    R: Send,
{
    match result {
        Ok(value) => {
            transaction.commit().await?;
            Ok(value)
        }
        Err(report) => {
            if let Err(rollback) = transaction.roll_back().await {
                tracing::error!("failed to roll back unit of work: {rollback:?}");
            }
            Err(report)
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use driver::database::SqliteDatabase;
    use kernel::KernelError;

    use crate::service::ResetStoreService;

    pub async fn seeded_store() -> error_stack::Result<SqliteDatabase, KernelError> {
        let path = std::env::temp_dir().join(format!("bookstore-{}.db", uuid::Uuid::new_v4()));
        let db = SqliteDatabase::open(path).await?;
        db.reset_store().await?;
        Ok(db)
    }
}
