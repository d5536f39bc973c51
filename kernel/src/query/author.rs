use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::Author;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorQuery<Connection>: 'static + Sync + Send {
    async fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Author>, KernelError>;
}

pub trait DependOnAuthorQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorQuery: AuthorQuery<Executor<Self>>;
    fn author_query(&self) -> &Self::AuthorQuery;
}
