use crate::database::{DependOnDatabaseConnection, Executor};
use crate::entity::{Book, BookView, Isbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection>: 'static + Sync + Send {
    async fn find_by_isbn(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_view_by_isbn(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<BookView>, KernelError>;
    async fn find_all(&self, con: &mut Connection)
        -> error_stack::Result<Vec<BookView>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<Executor<Self>>;
    fn book_query(&self) -> &Self::BookQuery;
}
