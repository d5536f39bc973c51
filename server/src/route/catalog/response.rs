use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::{AuthorDto, BookDto};

use crate::controller::Exhaust;
use crate::error::not_found;

const AUTHOR_SEPARATOR: &str = ",";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookResponse {
    #[serde(rename = "ISBN")]
    isbn: String,
    title: String,
    year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(rename = "CategoryID")]
    category_id: String,
    category_name: Option<String>,
    #[serde(rename = "PublisherID")]
    publisher_id: String,
    publisher_name: Option<String>,
    /// Comma-separated, the way the dashboard splits it. `null` for a book with no authors.
    authors: Option<String>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            isbn: value.isbn,
            title: value.title,
            year: value.year,
            price: value.price,
            category_id: value.category_id,
            category_name: value.category_name,
            publisher_id: value.publisher_id,
            publisher_name: value.publisher_name,
            authors: (!value.authors.is_empty()).then(|| value.authors.join(AUTHOR_SEPARATOR)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorResponse {
    #[serde(rename = "AuthorID")]
    author_id: String,
    name: String,
}

pub struct Presenter;

impl Exhaust<Vec<BookDto>> for Presenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(input.into_iter().map(BookResponse::from).collect())
    }
}

impl Exhaust<Option<BookDto>> for Presenter {
    type To = Response;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        match input {
            Some(book) => Json(BookResponse::from(book)).into_response(),
            None => not_found("Book"),
        }
    }
}

impl Exhaust<Vec<AuthorDto>> for Presenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(|author| AuthorResponse {
                    author_id: author.id,
                    name: author.name,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use serde_json::{json, Value};

    use application::transfer::BookDto;

    use super::BookResponse;

    fn book(authors: &[&str]) -> BookDto {
        BookDto {
            isbn: "9780000000009".to_string(),
            title: "Unsigned Pages".to_string(),
            year: 2023,
            price: Decimal::new(1200, 2),
            category_id: "CAT01".to_string(),
            category_name: None,
            publisher_id: "PUB01".to_string(),
            publisher_name: None,
            authors: authors.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn authors_are_one_comma_joined_column() {
        let row = serde_json::to_value(BookResponse::from(book(&["Maren Holt", "Ines Lindqvist"])))
            .expect("serializable");
        assert_eq!(row["Authors"], json!("Maren Holt,Ines Lindqvist"));
        assert_eq!(row["Price"], json!(12.0));

        let row = serde_json::to_value(BookResponse::from(book(&[]))).expect("serializable");
        assert_eq!(row["Authors"], Value::Null);
    }
}
