use kernel::prelude::entity::{Author, DestructAuthor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: String,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
