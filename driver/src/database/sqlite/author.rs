use sqlx::SqliteConnection;

use kernel::interface::query::AuthorQuery;
use kernel::prelude::entity::{Author, AuthorId, AuthorName};
use kernel::KernelError;

use crate::error::ConvertError;

pub struct SqliteAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery<SqliteConnection> for SqliteAuthorRepository {
    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        SqliteAuthorInternal::find_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: String,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(AuthorId::new(value.id), AuthorName::new(value.name))
    }
}

pub(in crate::database) struct SqliteAuthorInternal;

impl SqliteAuthorInternal {
    async fn find_all(con: &mut SqliteConnection) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=sqlite
            r#"
            SELECT AuthorID AS id, Name AS name
            FROM author
            ORDER BY AuthorID
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AuthorQuery;
    use kernel::prelude::entity::{AuthorId, AuthorName};
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteAuthorRepository;

    #[tokio::test]
    async fn lists_authors_by_id() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;
        let authors = SqliteAuthorRepository.find_all(&mut *con).await?;
        assert_eq!(authors.len(), 5);
        assert_eq!(authors[0].id(), &AuthorId::new("A01"));
        assert_eq!(authors[0].name(), &AuthorName::new("Maren Holt"));
        Ok(())
    }
}
