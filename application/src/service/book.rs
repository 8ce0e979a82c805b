use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookAuthor, BookId, BookTitle, IsAvailable};
use kernel::KernelError;

use crate::transfer::{
    BookDto, ChangeBookAvailabilityDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book = self
            .book_modifier()
            .create(
                &mut connection,
                BookTitle::new(dto.title),
                BookAuthor::new(dto.author),
            )
            .await?;
        connection.commit().await?;

        tracing::info!(book_id = *book.id().as_ref(), "book created");
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let UpdateBookDto { id, title, author } = dto;
        let Some(mut book) = self
            .book_query()
            .find_by_id(&mut connection, &BookId::new(id))
            .await?
        else {
            return Ok(None);
        };

        book.substitute(|book| {
            if let Some(title) = title {
                *book.title = BookTitle::new(title);
            }
            if let Some(author) = author {
                *book.author = BookAuthor::new(author);
            }
        });
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(Some(BookDto::from(book)))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let deleted = self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        if deleted {
            tracing::info!(book_id = dto.id, "book deleted");
        }
        Ok(deleted)
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

/// Manual overrides. They do not look at borrow records, so they can leave a book
/// flagged unavailable with nothing on loan, or the other way round.
#[async_trait::async_trait]
pub trait ChangeBookAvailabilityService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    /// `None` when the book does not exist or is already unavailable.
    async fn mark_book_unavailable(
        &self,
        dto: ChangeBookAvailabilityDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        self.change_availability(dto, IsAvailable::new(false)).await
    }

    /// `None` when the book does not exist or is already available.
    async fn mark_book_available(
        &self,
        dto: ChangeBookAvailabilityDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        self.change_availability(dto, IsAvailable::new(true)).await
    }

    async fn change_availability(
        &self,
        dto: ChangeBookAvailabilityDto,
        to: IsAvailable,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .filter(|book| book.is_available() != &to);
        let Some(mut book) = book else {
            tracing::debug!(book_id = dto.id, to = *to.as_ref(), "availability unchanged");
            return Ok(None);
        };

        book.substitute(|book| *book.is_available = to);
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::info!(book_id = dto.id, available = *to.as_ref(), "availability overridden");
        Ok(Some(BookDto::from(book)))
    }
}

impl<T> ChangeBookAvailabilityService for T where T: DependOnBookQuery + DependOnBookModifier {}
