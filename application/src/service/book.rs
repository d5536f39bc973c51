use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::prelude::entity::Isbn;
use kernel::KernelError;

use crate::transfer::{BookDto, GetBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let books = self.book_query().find_all(&mut *connection).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let isbn = Isbn::new(dto.isbn);
        let book = self
            .book_query()
            .find_view_by_isbn(&mut *connection, &isbn)
            .await?;
        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}
