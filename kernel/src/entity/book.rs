mod author;
mod id;
mod title;

pub use self::{author::*, id::*, title::*};
use crate::entity::common::IsAvailable;
use destructure::{Destructure, Mutation};
use vodca::References;

/// A single circulating copy. Availability is a flag, never a count.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    is_available: IsAvailable,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, is_available: IsAvailable) -> Self {
        Self {
            id,
            title,
            author,
            is_available,
        }
    }
}
