use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{IsActive, User, UserEmail, UserId, UserName};
use kernel::KernelError;

use crate::database::inmemory::InMemoryTransaction;

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.read().users.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con.read().users.list_all())
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        name: UserName,
        email: UserEmail,
    ) -> error_stack::Result<User, KernelError> {
        let user = con
            .write()
            .users
            .insert(|id| User::new(UserId::new(id), name, email, IsActive::default()));
        Ok(user)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        con.write().users.put(*user.id().as_ref(), user.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.write().users.delete(*user_id.as_ref()))
    }
}
