use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            email,
            is_active,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            is_active: is_active.into(),
        }
    }
}

pub struct GetUserDto {
    pub id: i64,
}

pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

/// Fields left as `None` keep their current value.
#[derive(Default)]
pub struct UpdateUserDto {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct DeleteUserDto {
    pub id: i64,
}

pub struct DeactivateUserDto {
    pub id: i64,
}
