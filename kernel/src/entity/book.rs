mod isbn;
mod price;
mod title;
mod year;

pub use self::{isbn::*, price::*, title::*, year::*};
use crate::entity::{CategoryId, PublisherId};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    isbn: Isbn,
    title: BookTitle,
    year: BookYear,
    price: BookPrice,
    category_id: CategoryId,
    publisher_id: PublisherId,
}

impl Book {
    pub fn new(
        isbn: Isbn,
        title: BookTitle,
        year: BookYear,
        price: BookPrice,
        category_id: CategoryId,
        publisher_id: PublisherId,
    ) -> Self {
        Self {
            isbn,
            title,
            year,
            price,
            category_id,
            publisher_id,
        }
    }
}
