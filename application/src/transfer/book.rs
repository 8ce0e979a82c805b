use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub is_available: bool,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            is_available,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            is_available: is_available.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
}

#[derive(Default)]
pub struct UpdateBookDto {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
}

pub struct DeleteBookDto {
    pub id: i64,
}

pub struct ChangeBookAvailabilityDto {
    pub id: i64,
}
