use kernel::prelude::entity::{DestructRent, Rent};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentDto {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: Date,
    pub return_date: Option<Date>,
}

impl From<Rent> for RentDto {
    fn from(value: Rent) -> Self {
        let DestructRent {
            id,
            user_id,
            book_id,
            borrow_date,
            return_date,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            borrow_date: borrow_date.into(),
            return_date: return_date.map(Into::into),
        }
    }
}

pub struct CreateRentDto {
    pub user_id: i64,
    pub book_id: i64,
}

pub struct ReturnRentDto {
    pub id: i64,
}

pub struct GetRentFromUserIdDto {
    pub user_id: i64,
}

pub struct GetActiveRentDto {
    pub user_id: i64,
    pub book_id: i64,
}
