//! Denormalized read models returned by the reporting queries.

use destructure::Destructure;
use vodca::References;

use crate::entity::{AuthorName, Book, BookTitle, CategoryName, CustomerName, Order, PublisherName};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookView {
    book: Book,
    category_name: Option<CategoryName>,
    publisher_name: Option<PublisherName>,
    authors: Vec<AuthorName>,
}

impl BookView {
    pub fn new(
        book: Book,
        category_name: Option<CategoryName>,
        publisher_name: Option<PublisherName>,
        authors: Vec<AuthorName>,
    ) -> Self {
        Self {
            book,
            category_name,
            publisher_name,
            authors,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct OrderView {
    order: Order,
    customer_name: Option<CustomerName>,
}

impl OrderView {
    pub fn new(order: Order, customer_name: Option<CustomerName>) -> Self {
        Self {
            order,
            customer_name,
        }
    }
}

/// A record keyed by ISBN, joined with the title of its book.
/// The title is absent when the book row is missing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Titled<T> {
    record: T,
    book_title: Option<BookTitle>,
}

impl<T> Titled<T> {
    pub fn new(record: T, book_title: Option<BookTitle>) -> Self {
        Self { record, book_title }
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn book_title(&self) -> Option<&BookTitle> {
        self.book_title.as_ref()
    }

    pub fn into_parts(self) -> (T, Option<BookTitle>) {
        (self.record, self.book_title)
    }
}
