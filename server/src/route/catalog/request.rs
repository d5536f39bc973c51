use application::transfer::GetBookDto;

use crate::controller::Intake;

#[derive(Debug)]
pub struct GetBookRequest {
    isbn: String,
}

impl GetBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

pub struct Transformer;

impl Intake<GetBookRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { isbn: input.isbn }
    }
}
