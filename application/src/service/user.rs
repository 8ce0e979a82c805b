use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{IsActive, UserEmail, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{
    CreateUserDto, DeactivateUserDto, DeleteUserDto, GetUserDto, UpdateUserDto, UserDto,
};

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id).await?;

        Ok(user.map(UserDto::from))
    }

    async fn get_all_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let users = self.user_query().find_all(&mut connection).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user = self
            .user_modifier()
            .create(
                &mut connection,
                UserName::new(dto.name),
                UserEmail::new(dto.email),
            )
            .await?;
        connection.commit().await?;

        tracing::info!(user_id = *user.id().as_ref(), "user created");
        Ok(UserDto::from(user))
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}

#[async_trait::async_trait]
pub trait UpdateUserService:
    'static + Sync + Send + DependOnUserQuery + DependOnUserModifier
{
    /// `None` when the user does not exist.
    async fn update_user(
        &self,
        dto: UpdateUserDto,
    ) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let UpdateUserDto { id, name, email } = dto;
        let Some(mut user) = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(id))
            .await?
        else {
            return Ok(None);
        };

        user.substitute(|user| {
            if let Some(name) = name {
                *user.name = UserName::new(name);
            }
            if let Some(email) = email {
                *user.email = UserEmail::new(email);
            }
        });
        self.user_modifier().update(&mut connection, &user).await?;
        connection.commit().await?;

        Ok(Some(UserDto::from(user)))
    }
}

impl<T> UpdateUserService for T where T: DependOnUserQuery + DependOnUserModifier {}

#[async_trait::async_trait]
pub trait DeleteUserService: 'static + Sync + Send + DependOnUserModifier {
    /// Borrow records that reference the user are kept.
    async fn delete_user(&self, dto: DeleteUserDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let deleted = self.user_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        if deleted {
            tracing::info!(user_id = dto.id, "user deleted");
        }
        Ok(deleted)
    }
}

impl<T> DeleteUserService for T where T: DependOnUserModifier {}

#[async_trait::async_trait]
pub trait DeactivateUserService:
    'static + Sync + Send + DependOnUserQuery + DependOnUserModifier
{
    /// `None` when the user does not exist or is already inactive.
    /// There is no way back to active.
    async fn deactivate_user(
        &self,
        dto: DeactivateUserDto,
    ) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &id)
            .await?
            .filter(|user| *user.is_active().as_ref());
        let Some(mut user) = user else {
            tracing::debug!(user_id = dto.id, "user missing or already inactive");
            return Ok(None);
        };

        user.substitute(|user| *user.is_active = IsActive::new(false));
        self.user_modifier().update(&mut connection, &user).await?;
        connection.commit().await?;

        tracing::info!(user_id = dto.id, "user deactivated");
        Ok(Some(UserDto::from(user)))
    }
}

impl<T> DeactivateUserService for T where T: DependOnUserQuery + DependOnUserModifier {}
