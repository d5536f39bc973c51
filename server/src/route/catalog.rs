use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use application::service::{GetAuthorService, GetBookService};

use crate::controller::Controller;
use crate::handler::AppModule;

pub use self::{request::*, response::*};

mod request;
mod response;

pub trait CatalogRouter {
    fn route_catalog(self) -> Self;
}

impl CatalogRouter for Router<AppModule> {
    fn route_catalog(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_books())
                    .await
            }),
        )
        .route(
            "/books/:isbn",
            get(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    Controller::new(Transformer, Presenter)
                        .handle(GetBookRequest::new(isbn), |dto| module.database().get_book(dto))
                        .await
                },
            ),
        )
        .route(
            "/authors",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_authors())
                    .await
            }),
        )
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use kernel::KernelError;

    use crate::route::test::spawn_server;

    #[tokio::test]
    async fn lists_books_with_names() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let books: Value = reqwest::get(format!("{base}/api/books"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        let books = books.as_array().expect("array");
        assert_eq!(books.len(), 6);

        let lines = books
            .iter()
            .find(|book| book["ISBN"] == json!("9780000000003"))
            .expect("seeded book");
        assert_eq!(lines["Title"], json!("Northern Lines"));
        assert_eq!(lines["Price"], json!(24.99));
        assert_eq!(lines["CategoryName"], json!("Fiction"));
        assert_eq!(lines["Authors"], json!("Maren Holt,Ines Lindqvist"));
        Ok(())
    }

    #[tokio::test]
    async fn finds_single_book() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;

        let response = reqwest::get(format!("{base}/books/9780000000002"))
            .await
            .expect("request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let book: Value = response.json().await.expect("json body");
        assert_eq!(book["Price"], json!(5.5));

        let response = reqwest::get(format!("{base}/books/0000000000000"))
            .await
            .expect("request");
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "error": "Book not found" }));
        Ok(())
    }

    #[tokio::test]
    async fn lists_authors() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let authors: Value = reqwest::get(format!("{base}/authors"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");
        assert_eq!(authors.as_array().map(Vec::len), Some(5));
        assert_eq!(authors[0], json!({ "AuthorID": "A01", "Name": "Maren Holt" }));
        Ok(())
    }
}
