mod email;
mod id;
mod name;

pub use self::{email::*, id::*, name::*};
use crate::entity::common::IsActive;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct User {
    id: UserId,
    name: UserName,
    email: UserEmail,
    is_active: IsActive,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: UserEmail, is_active: IsActive) -> Self {
        Self {
            id,
            name,
            email,
            is_active,
        }
    }
}
