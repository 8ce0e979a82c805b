mod borrow_date;
mod id;
mod return_date;

pub use self::{borrow_date::*, id::*, return_date::*};
use crate::entity::{BookId, UserId};
use destructure::{Destructure, Mutation};
use vodca::References;

/// One borrow transaction. Outstanding while `return_date` is `None`.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Rent {
    id: RentId,
    user_id: UserId,
    book_id: BookId,
    borrow_date: BorrowDate,
    return_date: Option<ReturnDate>,
}

impl Rent {
    pub fn new(
        id: RentId,
        user_id: UserId,
        book_id: BookId,
        borrow_date: BorrowDate,
        return_date: Option<ReturnDate>,
    ) -> Self {
        Self {
            id,
            user_id,
            book_id,
            borrow_date,
            return_date,
        }
    }

    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}
