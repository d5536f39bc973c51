use sqlx::SqliteConnection;

use kernel::interface::query::BookQuery;
use kernel::prelude::entity::{
    AuthorName, Book, BookPrice, BookTitle, BookView, BookYear, CategoryId, CategoryName, Isbn,
    PublisherId, PublisherName,
};
use kernel::KernelError;

use crate::database::sqlite::decimal_from_real;
use crate::error::ConvertError;

const AUTHOR_SEPARATOR: char = '\u{1f}';

pub struct SqliteBookRepository;

#[async_trait::async_trait]
impl BookQuery<SqliteConnection> for SqliteBookRepository {
    async fn find_by_isbn(
        &self,
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        SqliteBookInternal::find_by_isbn(con, isbn).await
    }

    async fn find_view_by_isbn(
        &self,
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<BookView>, KernelError> {
        SqliteBookInternal::find_view_by_isbn(con, isbn).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<BookView>, KernelError> {
        SqliteBookInternal::find_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    isbn: String,
    title: String,
    year: i32,
    price: f64,
    category_id: String,
    publisher_id: String,
}

impl TryFrom<BookRow> for Book {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: BookRow) -> Result<Self, Self::Error> {
        Ok(Book::new(
            Isbn::new(value.isbn),
            BookTitle::new(value.title),
            BookYear::new(value.year),
            BookPrice::new(decimal_from_real(value.price)?),
            CategoryId::new(value.category_id),
            PublisherId::new(value.publisher_id),
        ))
    }
}

#[derive(sqlx::FromRow)]
struct BookViewRow {
    #[sqlx(flatten)]
    book: BookRow,
    category_name: Option<String>,
    publisher_name: Option<String>,
    authors: Option<String>,
}

impl TryFrom<BookViewRow> for BookView {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: BookViewRow) -> Result<Self, Self::Error> {
        let authors = value
            .authors
            .map(|names| {
                names
                    .split(AUTHOR_SEPARATOR)
                    .map(AuthorName::new)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(BookView::new(
            Book::try_from(value.book)?,
            value.category_name.map(CategoryName::new),
            value.publisher_name.map(PublisherName::new),
            authors,
        ))
    }
}

pub(in crate::database) struct SqliteBookInternal;

impl SqliteBookInternal {
    async fn find_by_isbn(
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=sqlite
            r#"
            SELECT ISBN AS isbn, Title AS title, Year AS year, Price AS price,
                   CategoryID AS category_id, PublisherID AS publisher_id
            FROM book
            WHERE ISBN = ?
            "#,
        )
        .bind(isbn.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Book::try_from).transpose()
    }

    async fn find_view_by_isbn(
        con: &mut SqliteConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<BookView>, KernelError> {
        let row = sqlx::query_as::<_, BookViewRow>(&format!("{BOOK_VIEW} WHERE b.ISBN = ?"))
            .bind(isbn.as_ref())
            .fetch_optional(con)
            .await
            .convert_error()?;
        row.map(BookView::try_from).transpose()
    }

    async fn find_all(con: &mut SqliteConnection) -> error_stack::Result<Vec<BookView>, KernelError> {
        let rows = sqlx::query_as::<_, BookViewRow>(&format!("{BOOK_VIEW} ORDER BY b.ISBN"))
            .fetch_all(con)
            .await
            .convert_error()?;
        rows.into_iter().map(BookView::try_from).collect()
    }
}

// Authors are folded into one column, ordered by id and joined with the unit separator.
// language=sqlite
const BOOK_VIEW: &str = r#"
    SELECT b.ISBN AS isbn, b.Title AS title, b.Year AS year, b.Price AS price,
           b.CategoryID AS category_id, b.PublisherID AS publisher_id,
           c.CategoryName AS category_name, p.Name AS publisher_name,
           (SELECT GROUP_CONCAT(Name, char(31))
            FROM (SELECT a.Name AS Name
                  FROM book_author ba
                  JOIN author a ON a.AuthorID = ba.AuthorID
                  WHERE ba.ISBN = b.ISBN
                  ORDER BY a.AuthorID)) AS authors
    FROM book b
    LEFT JOIN category c ON c.CategoryID = b.CategoryID
    LEFT JOIN publisher p ON p.PublisherID = b.PublisherID
"#;

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::prelude::entity::{AuthorName, BookPrice, CategoryName, Isbn};
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteBookRepository;

    #[tokio::test]
    async fn finds_seeded_book() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let isbn = Isbn::new("9780000000002");
        let book = SqliteBookRepository
            .find_by_isbn(&mut *con, &isbn)
            .await?
            .expect("seeded book");
        assert_eq!(book.price(), &BookPrice::new(dec!(5.50)));

        let missing = SqliteBookRepository
            .find_by_isbn(&mut *con, &Isbn::new("0000000000000"))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn view_joins_names_and_authors() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let view = SqliteBookRepository
            .find_view_by_isbn(&mut *con, &Isbn::new("9780000000003"))
            .await?
            .expect("seeded book");
        assert_eq!(
            view.authors(),
            &vec![AuthorName::new("Maren Holt"), AuthorName::new("Ines Lindqvist")]
        );
        assert_eq!(view.category_name(), &Some(CategoryName::new("Fiction")));

        let all = SqliteBookRepository.find_all(&mut *con).await?;
        assert_eq!(all.len(), 6);
        assert!(all.windows(2).all(|pair| pair[0].book().isbn() < pair[1].book().isbn()));
        Ok(())
    }
}
