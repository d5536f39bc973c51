use rust_decimal::Decimal;

use kernel::prelude::entity::{BookView, DestructBook, DestructBookView};

#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub year: i32,
    pub price: Decimal,
    pub category_id: String,
    pub category_name: Option<String>,
    pub publisher_id: String,
    pub publisher_name: Option<String>,
    pub authors: Vec<String>,
}

impl From<BookView> for BookDto {
    fn from(value: BookView) -> Self {
        let DestructBookView {
            book,
            category_name,
            publisher_name,
            authors,
        } = value.into_destruct();
        let DestructBook {
            isbn,
            title,
            year,
            price,
            category_id,
            publisher_id,
        } = book.into_destruct();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            year: year.into(),
            price: price.into(),
            category_id: category_id.into(),
            category_name: category_name.map(Into::into),
            publisher_id: publisher_id.into(),
            publisher_name: publisher_name.map(Into::into),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}
