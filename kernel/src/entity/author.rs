use destructure::Destructure;
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
}

impl Author {
    pub fn new(id: AuthorId, name: AuthorName) -> Self {
        Self { id, name }
    }
}
