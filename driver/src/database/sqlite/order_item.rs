use sqlx::SqliteConnection;

use kernel::interface::query::OrderItemQuery;
use kernel::interface::update::OrderItemModifier;
use kernel::prelude::entity::{
    BookPrice, BookTitle, Isbn, ItemQuantity, OrderId, OrderItem, OrderItemId, Titled,
};
use kernel::KernelError;

use crate::database::sqlite::{decimal_from_real, real_from_decimal};
use crate::error::ConvertError;

pub struct SqliteOrderItemRepository;

#[async_trait::async_trait]
impl OrderItemQuery<SqliteConnection> for SqliteOrderItemRepository {
    async fn find_by_order_id(
        &self,
        con: &mut SqliteConnection,
        order_id: &OrderId,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError> {
        SqliteOrderItemInternal::find_by_order_id(con, order_id).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError> {
        SqliteOrderItemInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl OrderItemModifier<SqliteConnection> for SqliteOrderItemRepository {
    async fn create(
        &self,
        con: &mut SqliteConnection,
        item: &OrderItem,
    ) -> error_stack::Result<(), KernelError> {
        SqliteOrderItemInternal::create(con, item).await
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: String,
    order_id: String,
    isbn: String,
    quantity: i32,
    price: f64,
    book_title: Option<String>,
}

impl TryFrom<OrderItemRow> for Titled<OrderItem> {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: OrderItemRow) -> Result<Self, Self::Error> {
        let item = OrderItem::new(
            OrderItemId::new(value.id),
            OrderId::new(value.order_id),
            Isbn::new(value.isbn),
            ItemQuantity::new(value.quantity),
            BookPrice::new(decimal_from_real(value.price)?),
        );
        Ok(Titled::new(item, value.book_title.map(BookTitle::new)))
    }
}

pub(in crate::database) struct SqliteOrderItemInternal;

impl SqliteOrderItemInternal {
    async fn find_by_order_id(
        con: &mut SqliteConnection,
        order_id: &OrderId,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{ORDER_ITEM_VIEW} WHERE i.OrderID = ? ORDER BY i.OrderItemID"
        ))
        .bind(order_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Titled::try_from).collect()
    }

    async fn find_all(
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<OrderItem>>, KernelError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{ORDER_ITEM_VIEW} ORDER BY i.OrderID, i.OrderItemID"
        ))
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Titled::try_from).collect()
    }

    async fn create(con: &mut SqliteConnection, item: &OrderItem) -> error_stack::Result<(), KernelError> {
        // language=sqlite
        sqlx::query(
            r#"
            INSERT INTO orderItem (OrderItemID, OrderID, ISBN, Quantity, Price)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.order_id().as_ref())
        .bind(item.isbn().as_ref())
        .bind(item.quantity().as_ref())
        .bind(real_from_decimal(item.price().as_ref())?)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

// language=sqlite
const ORDER_ITEM_VIEW: &str = r#"
    SELECT i.OrderItemID AS id, i.OrderID AS order_id, i.ISBN AS isbn,
           i.Quantity AS quantity, i.Price AS price, b.Title AS book_title
    FROM orderItem i
    LEFT JOIN book b ON b.ISBN = i.ISBN
"#;

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::OrderItemQuery;
    use kernel::prelude::entity::{BookPrice, BookTitle, ItemQuantity, OrderId};
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteOrderItemRepository;

    #[tokio::test]
    async fn items_carry_price_snapshot_and_title() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let items = SqliteOrderItemRepository
            .find_by_order_id(&mut *con, &OrderId::new("O001"))
            .await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].record().quantity(), &ItemQuantity::new(2));
        assert_eq!(items[0].record().price(), &BookPrice::new(dec!(10.00)));
        assert_eq!(items[0].book_title(), Some(&BookTitle::new("The Silent Shore")));

        let all = SqliteOrderItemRepository.find_all(&mut *con).await?;
        assert_eq!(all.len(), 5);
        Ok(())
    }
}
