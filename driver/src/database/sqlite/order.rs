use sqlx::SqliteConnection;
use time::Date;

use kernel::interface::query::OrderQuery;
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{
    CustomerId, CustomerName, Order, OrderDate, OrderId, OrderTotal, OrderView,
};
use kernel::KernelError;

use crate::database::sqlite::{decimal_from_real, real_from_decimal};
use crate::error::ConvertError;

pub struct SqliteOrderRepository;

#[async_trait::async_trait]
impl OrderQuery<SqliteConnection> for SqliteOrderRepository {
    async fn find_by_id(
        &self,
        con: &mut SqliteConnection,
        id: &OrderId,
    ) -> error_stack::Result<Option<OrderView>, KernelError> {
        SqliteOrderInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<OrderView>, KernelError> {
        SqliteOrderInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl OrderModifier<SqliteConnection> for SqliteOrderRepository {
    async fn create(
        &self,
        con: &mut SqliteConnection,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        SqliteOrderInternal::create(con, order).await
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
    order_date: Date,
    order_total: f64,
    customer_name: Option<String>,
}

impl TryFrom<OrderRow> for OrderView {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: OrderRow) -> Result<Self, Self::Error> {
        let order = Order::new(
            OrderId::new(value.id),
            CustomerId::new(value.customer_id),
            OrderDate::new(value.order_date),
            OrderTotal::new(decimal_from_real(value.order_total)?),
        );
        Ok(OrderView::new(order, value.customer_name.map(CustomerName::new)))
    }
}

pub(in crate::database) struct SqliteOrderInternal;

impl SqliteOrderInternal {
    async fn find_by_id(
        con: &mut SqliteConnection,
        id: &OrderId,
    ) -> error_stack::Result<Option<OrderView>, KernelError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{ORDER_VIEW} WHERE o.OrderID = ?"))
            .bind(id.as_ref())
            .fetch_optional(con)
            .await
            .convert_error()?;
        row.map(OrderView::try_from).transpose()
    }

    async fn find_all(con: &mut SqliteConnection) -> error_stack::Result<Vec<OrderView>, KernelError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{ORDER_VIEW} ORDER BY o.OrderDate, o.OrderID"
        ))
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(OrderView::try_from).collect()
    }

    async fn create(con: &mut SqliteConnection, order: &Order) -> error_stack::Result<(), KernelError> {
        // language=sqlite
        sqlx::query(
            r#"
            INSERT INTO customer_order (OrderID, CustomerID, OrderDate, OrderTotal)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.id().as_ref())
        .bind(order.customer_id().as_ref())
        .bind(order.date().as_ref())
        .bind(real_from_decimal(order.total().as_ref())?)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

// language=sqlite
const ORDER_VIEW: &str = r#"
    SELECT o.OrderID AS id, o.CustomerID AS customer_id, o.OrderDate AS order_date,
           o.OrderTotal AS order_total, c.Name AS customer_name
    FROM customer_order o
    LEFT JOIN customer c ON c.CustomerID = o.CustomerID
"#;

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::OrderQuery;
    use kernel::interface::update::OrderModifier;
    use kernel::prelude::entity::{
        CustomerId, CustomerName, Order, OrderDate, OrderId, OrderTotal,
    };
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteOrderRepository;

    #[tokio::test]
    async fn seeded_order_has_customer_name() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let view = SqliteOrderRepository
            .find_by_id(&mut *con, &OrderId::new("O001"))
            .await?
            .expect("seeded order");
        assert_eq!(view.order().total(), &OrderTotal::new(dec!(25.50)));
        assert_eq!(view.order().date(), &OrderDate::new(date!(2024 - 01 - 15)));
        assert_eq!(view.customer_name(), &Some(CustomerName::new("Alice Moreau")));
        Ok(())
    }

    #[tokio::test]
    async fn created_order_is_visible_after_commit() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let id = OrderId::new(uuid::Uuid::new_v4().to_string());
        let order = Order::new(
            id.clone(),
            CustomerId::new("C002"),
            OrderDate::new(date!(2024 - 03 - 01)),
            OrderTotal::new(dec!(18.75)),
        );

        let mut transaction = db.transact().await?;
        SqliteOrderRepository.create(&mut *transaction, &order).await?;
        transaction.commit().await?;

        let mut con = db.connect().await?;
        let found = SqliteOrderRepository.find_by_id(&mut *con, &id).await?;
        assert_eq!(found.map(|view| view.order().clone()), Some(order));

        let all = SqliteOrderRepository.find_all(&mut *con).await?;
        assert_eq!(all.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_order_disappears() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let id = OrderId::new(uuid::Uuid::new_v4().to_string());
        let order = Order::new(
            id.clone(),
            CustomerId::new("C003"),
            OrderDate::today(),
            OrderTotal::new(dec!(5.50)),
        );

        let mut transaction = db.transact().await?;
        SqliteOrderRepository.create(&mut *transaction, &order).await?;
        transaction.roll_back().await?;

        let mut con = db.connect().await?;
        assert!(SqliteOrderRepository.find_by_id(&mut *con, &id).await?.is_none());
        Ok(())
    }
}
