use error_stack::Report;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnInventoryQuery, InventoryQuery};
use kernel::interface::update::{DependOnInventoryModifier, InventoryModifier};
use kernel::prelude::entity::{Inventory, Isbn, StockQuantity, Titled};
use kernel::KernelError;

use crate::service::settle;
use crate::transfer::{InventoryDto, SetStockDto};

/// Overwrites the stock of a book, creating its inventory record when it has none.
///
/// Runs as a unit of work, so it never interleaves with an order being placed.
#[async_trait::async_trait]
pub trait SetStockService:
    'static + Sync + Send + DependOnBookQuery + DependOnInventoryQuery + DependOnInventoryModifier
{
    async fn set_stock(&self, dto: SetStockDto) -> error_stack::Result<InventoryDto, KernelError> {
        if dto.isbn.trim().is_empty() {
            return Err(Report::new(KernelError::validation("isbn is required")));
        }
        if dto.stock_quantity < 0 {
            return Err(Report::new(KernelError::validation(
                "stockQuantity must not be negative",
            )));
        }
        let stock = i32::try_from(dto.stock_quantity).map_err(|error| {
            Report::new(error).change_context(KernelError::validation("stockQuantity is too large"))
        })?;
        let isbn = Isbn::new(dto.isbn);

        let mut transaction = self.database_connection().transact().await?;
        let stored = async {
            let book = self
                .book_query()
                .find_by_isbn(&mut *transaction, &isbn)
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::UnknownBook {
                        isbn: isbn.to_string(),
                    })
                })?;
            let inventory = Inventory::new(isbn.clone(), StockQuantity::new(stock));
            self.inventory_modifier()
                .upsert(&mut *transaction, &inventory)
                .await?;
            let stored = self
                .inventory_query()
                .find_by_isbn(&mut *transaction, &isbn)
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::Internal)
                        .attach_printable(format!("inventory record for {isbn} vanished after upsert"))
                })?;
            Ok::<_, Report<KernelError>>(Titled::new(stored, Some(book.title().clone())))
        }
        .await;

        let stored = settle(transaction, stored).await?;
        tracing::info!("stock of {isbn} set to {stock}");
        Ok(InventoryDto::from(stored))
    }
}

impl<T> SetStockService for T where
    T: DependOnBookQuery + DependOnInventoryQuery + DependOnInventoryModifier
{
}

#[async_trait::async_trait]
pub trait GetInventoryService: 'static + Sync + Send + DependOnInventoryQuery {
    async fn get_inventory(&self) -> error_stack::Result<Vec<InventoryDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let inventory = self.inventory_query().find_all(&mut *connection).await?;
        Ok(inventory.into_iter().map(InventoryDto::from).collect())
    }
}

impl<T> GetInventoryService for T where T: DependOnInventoryQuery {}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::service::test::seeded_store;
    use crate::service::{GetInventoryService, SetStockService};
    use crate::transfer::{InventoryDto, SetStockDto};

    #[tokio::test]
    async fn creates_then_replaces_stock() -> error_stack::Result<(), KernelError> {
        let db = seeded_store().await?;

        let created = db
            .set_stock(SetStockDto {
                isbn: "9780000000006".to_string(),
                stock_quantity: 9,
            })
            .await?;
        assert_eq!(
            created,
            InventoryDto {
                isbn: "9780000000006".to_string(),
                stock_quantity: 9,
                book_title: Some("Field Notes on Rain".to_string()),
            }
        );

        let replaced = db
            .set_stock(SetStockDto {
                isbn: "9780000000001".to_string(),
                stock_quantity: 0,
            })
            .await?;
        assert_eq!(replaced.stock_quantity, 0);

        let inventory = db.get_inventory().await?;
        assert_eq!(inventory.len(), 6);
        assert!(inventory.contains(&created));
        assert!(inventory.contains(&replaced));
        Ok(())
    }

    #[tokio::test]
    async fn rejects_bad_stock_requests() -> error_stack::Result<(), KernelError> {
        let db = seeded_store().await?;

        for (isbn, stock_quantity) in [
            ("9780000000001", -1),
            ("9780000000001", i64::from(i32::MAX) + 1),
            (" ", 5),
        ] {
            let report = db
                .set_stock(SetStockDto {
                    isbn: isbn.to_string(),
                    stock_quantity,
                })
                .await
                .expect_err("invalid stock request");
            assert!(matches!(
                report.current_context(),
                KernelError::Validation { .. }
            ));
        }

        let report = db
            .set_stock(SetStockDto {
                isbn: "9789999999999".to_string(),
                stock_quantity: 5,
            })
            .await
            .expect_err("unknown book");
        assert_eq!(
            report.current_context(),
            &KernelError::UnknownBook {
                isbn: "9789999999999".to_string()
            }
        );
        assert_eq!(db.get_inventory().await?.len(), 5);
        Ok(())
    }
}
