use sqlx::SqliteConnection;

use kernel::interface::query::CustomerQuery;
use kernel::prelude::entity::{
    Customer, CustomerAddress, CustomerEmail, CustomerId, CustomerName, CustomerPhone,
};
use kernel::KernelError;

use crate::error::ConvertError;

pub struct SqliteCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery<SqliteConnection> for SqliteCustomerRepository {
    async fn find_by_id(
        &self,
        con: &mut SqliteConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        SqliteCustomerInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        SqliteCustomerInternal::find_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    address: String,
    email: String,
    phone: String,
}

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        Customer::new(
            CustomerId::new(value.id),
            CustomerName::new(value.name),
            CustomerAddress::new(value.address),
            CustomerEmail::new(value.email),
            CustomerPhone::new(value.phone),
        )
    }
}

pub(in crate::database) struct SqliteCustomerInternal;

impl SqliteCustomerInternal {
    async fn find_by_id(
        con: &mut SqliteConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            // language=sqlite
            r#"
            SELECT CustomerID AS id, Name AS name, Address AS address,
                   Email AS email, PhoneNumber AS phone
            FROM customer
            WHERE CustomerID = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Customer::from))
    }

    async fn find_all(con: &mut SqliteConnection) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            // language=sqlite
            r#"
            SELECT CustomerID AS id, Name AS name, Address AS address,
                   Email AS email, PhoneNumber AS phone
            FROM customer
            ORDER BY CustomerID
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::prelude::entity::{CustomerId, CustomerName};
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteCustomerRepository;

    #[tokio::test]
    async fn finds_customers() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let alice = SqliteCustomerRepository
            .find_by_id(&mut *con, &CustomerId::new("C001"))
            .await?
            .expect("seeded customer");
        assert_eq!(alice.name(), &CustomerName::new("Alice Moreau"));

        let nobody = SqliteCustomerRepository
            .find_by_id(&mut *con, &CustomerId::new("C999"))
            .await?;
        assert!(nobody.is_none());

        let all = SqliteCustomerRepository.find_all(&mut *con).await?;
        assert_eq!(all.len(), 4);
        Ok(())
    }
}
