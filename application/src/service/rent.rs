use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnRentModifier, RentModifier,
};
use kernel::prelude::entity::{BookId, BorrowDate, IsAvailable, RentId, ReturnDate, UserId};
use kernel::KernelError;

use crate::transfer::{
    CreateRentDto, GetActiveRentDto, GetRentFromUserIdDto, RentDto, ReturnRentDto,
};

#[async_trait::async_trait]
pub trait GetRentService: 'static + Sync + Send + DependOnRentQuery {
    async fn get_all_rents(&self) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let rents = self.rent_query().find_all(&mut connection).await?;
        Ok(rents.into_iter().map(RentDto::from).collect())
    }

    /// Unknown users simply have no rents.
    async fn get_rents_from_user(
        &self,
        dto: GetRentFromUserIdDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let rents = self
            .rent_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;

        Ok(rents.into_iter().map(RentDto::from).collect())
    }

    async fn get_active_rent(
        &self,
        dto: GetActiveRentDto,
    ) -> error_stack::Result<Option<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let book_id = BookId::new(dto.book_id);
        let rent = self
            .rent_query()
            .find_active(&mut connection, &user_id, &book_id)
            .await?;

        Ok(rent.map(RentDto::from))
    }
}

impl<T> GetRentService for T where T: DependOnRentQuery {}

#[async_trait::async_trait]
pub trait RentService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnRentQuery
    + DependOnRentModifier
{
    /// Checks run in a fixed order and the first failure wins:
    /// user exists, user is active, no outstanding rent for the pair,
    /// book exists, book is available.
    async fn rent_book(&self, dto: CreateRentDto) -> error_stack::Result<RentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let book_id = BookId::new(dto.book_id);

        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::UserNotFound)
                    .attach_printable(format!("user_id: {}", dto.user_id))
            })?;
        if !*user.is_active().as_ref() {
            return Err(Report::new(KernelError::UserInactive)
                .attach_printable(format!("user_id: {}", dto.user_id)));
        }

        if let Some(rent) = self
            .rent_query()
            .find_active(&mut connection, &user_id, &book_id)
            .await?
        {
            return Err(Report::new(KernelError::AlreadyBorrowed)
                .attach_printable(format!("outstanding rent_id: {}", rent.id().as_ref())));
        }

        let book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::BookNotFound)
                    .attach_printable(format!("book_id: {}", dto.book_id))
            })?;
        if !*book.is_available().as_ref() {
            return Err(Report::new(KernelError::BookUnavailable)
                .attach_printable(format!("book_id: {}", dto.book_id)));
        }

        let rent = self
            .rent_modifier()
            .create(&mut connection, user_id, book_id, BorrowDate::today())
            .await?;
        let book = book.reconstruct(|book| book.is_available = IsAvailable::new(false));
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::info!(
            rent_id = *rent.id().as_ref(),
            user_id = dto.user_id,
            book_id = dto.book_id,
            "book borrowed"
        );
        Ok(RentDto::from(rent))
    }
}

impl<T> RentService for T where
    T: DependOnUserQuery
        + DependOnBookQuery
        + DependOnBookModifier
        + DependOnRentQuery
        + DependOnRentModifier
{
}

#[async_trait::async_trait]
pub trait ReturnService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnRentQuery
    + DependOnRentModifier
{
    /// A missing rent and an already returned rent fail with the same
    /// `CannotReturn`; the cause is only attached to the report.
    async fn return_book(&self, dto: ReturnRentDto) -> error_stack::Result<RentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentId::new(dto.id);
        let rent = self
            .rent_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::CannotReturn)
                    .attach_printable(format!("rent_id {} does not exist", dto.id))
            })?;
        if !rent.is_active() {
            return Err(Report::new(KernelError::CannotReturn)
                .attach_printable(format!("rent_id {} is already returned", dto.id)));
        }

        let rent = rent.reconstruct(|rent| rent.return_date = Some(ReturnDate::today()));
        self.rent_modifier().update(&mut connection, &rent).await?;

        match self
            .book_query()
            .find_by_id(&mut connection, rent.book_id())
            .await?
        {
            Some(book) => {
                let book = book.reconstruct(|book| book.is_available = IsAvailable::new(true));
                self.book_modifier().update(&mut connection, &book).await?;
            }
            None => {
                tracing::warn!(
                    rent_id = dto.id,
                    book_id = *rent.book_id().as_ref(),
                    "returned book no longer exists"
                );
            }
        }
        connection.commit().await?;

        tracing::info!(rent_id = dto.id, "book returned");
        Ok(RentDto::from(rent))
    }
}

impl<T> ReturnService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnRentQuery + DependOnRentModifier
{
}
