use sqlx::SqliteConnection;

use kernel::interface::query::InventoryQuery;
use kernel::interface::update::InventoryModifier;
use kernel::prelude::entity::{BookTitle, Inventory, Isbn, ItemQuantity, StockQuantity, Titled};
use kernel::KernelError;

use crate::error::ConvertError;

pub struct SqliteInventoryRepository;

#[async_trait::async_trait]
impl InventoryQuery<SqliteConnection> for SqliteInventoryRepository {
    async fn find_by_isbn(
        &self,
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Inventory>, KernelError> {
        SqliteInventoryInternal::find_by_isbn(con, isbn).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<Inventory>>, KernelError> {
        SqliteInventoryInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl InventoryModifier<SqliteConnection> for SqliteInventoryRepository {
    async fn decrement(
        &self,
        con: &mut SqliteConnection,
        isbn: &Isbn,
        quantity: &ItemQuantity,
    ) -> error_stack::Result<bool, KernelError> {
        SqliteInventoryInternal::decrement(con, isbn, quantity).await
    }

    async fn upsert(
        &self,
        con: &mut SqliteConnection,
        inventory: &Inventory,
    ) -> error_stack::Result<(), KernelError> {
        SqliteInventoryInternal::upsert(con, inventory).await
    }
}

#[derive(sqlx::FromRow)]
struct InventoryRow {
    isbn: String,
    stock_quantity: i32,
}

impl From<InventoryRow> for Inventory {
    fn from(value: InventoryRow) -> Self {
        Inventory::new(Isbn::new(value.isbn), StockQuantity::new(value.stock_quantity))
    }
}

#[derive(sqlx::FromRow)]
struct TitledInventoryRow {
    #[sqlx(flatten)]
    inventory: InventoryRow,
    book_title: Option<String>,
}

impl From<TitledInventoryRow> for Titled<Inventory> {
    fn from(value: TitledInventoryRow) -> Self {
        Titled::new(
            Inventory::from(value.inventory),
            value.book_title.map(BookTitle::new),
        )
    }
}

pub(in crate::database) struct SqliteInventoryInternal;

impl SqliteInventoryInternal {
    async fn find_by_isbn(
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Inventory>, KernelError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            // language=sqlite
            r#"
            SELECT ISBN AS isbn, StockQuantity AS stock_quantity
            FROM inventory
            WHERE ISBN = ?
            "#,
        )
        .bind(isbn.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Inventory::from))
    }

    async fn find_all(
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<Inventory>>, KernelError> {
        let rows = sqlx::query_as::<_, TitledInventoryRow>(
            // language=sqlite
            r#"
            SELECT i.ISBN AS isbn, i.StockQuantity AS stock_quantity, b.Title AS book_title
            FROM inventory i
            LEFT JOIN book b ON b.ISBN = i.ISBN
            ORDER BY i.ISBN
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Titled::from).collect())
    }

    // Check and subtract happen in one statement, so stock can never go below zero.
    async fn decrement(
        con: &mut SqliteConnection,
        isbn: &Isbn,
        quantity: &ItemQuantity,
    ) -> error_stack::Result<bool, KernelError> {
        // language=sqlite
        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET StockQuantity = StockQuantity - ?
            WHERE ISBN = ? AND StockQuantity >= ?
            "#,
        )
        .bind(quantity.as_ref())
        .bind(isbn.as_ref())
        .bind(quantity.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }

    async fn upsert(con: &mut SqliteConnection, inventory: &Inventory) -> error_stack::Result<(), KernelError> {
        // language=sqlite
        sqlx::query(
            r#"
            INSERT INTO inventory (ISBN, StockQuantity)
            VALUES (?, ?)
            ON CONFLICT (ISBN) DO UPDATE SET StockQuantity = excluded.StockQuantity
            "#,
        )
        .bind(inventory.isbn().as_ref())
        .bind(inventory.stock().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
