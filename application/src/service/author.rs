use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::KernelError;

use crate::transfer::AuthorDto;

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let authors = self.author_query().find_all(&mut *connection).await?;
        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}
