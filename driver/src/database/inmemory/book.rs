use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle, IsAvailable};
use kernel::KernelError;

use crate::database::inmemory::InMemoryTransaction;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.read().books.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.read().books.list_all())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError> {
        let book = con
            .write()
            .books
            .insert(|id| Book::new(BookId::new(id), title, author, IsAvailable::default()));
        Ok(book)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.write().books.put(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.write().books.delete(*book_id.as_ref()))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookAuthor, BookTitle, IsAvailable};
    use kernel::KernelError;

    use crate::database::inmemory::{InMemoryBookRepository, InMemoryDatabase};

    #[tokio::test]
    async fn create_update_list() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut connection = db.transact().await?;

        let first = InMemoryBookRepository
            .create(&mut connection, BookTitle::new("1984"), BookAuthor::new("George Orwell"))
            .await?;
        let second = InMemoryBookRepository
            .create(
                &mut connection,
                BookTitle::new("Brave New World"),
                BookAuthor::new("Aldous Huxley"),
            )
            .await?;
        assert_eq!(first.is_available(), &IsAvailable::new(true));

        let mut first = first;
        first.substitute(|book| *book.is_available = IsAvailable::new(false));
        InMemoryBookRepository
            .update(&mut connection, &first)
            .await?;

        let all = InMemoryBookRepository.find_all(&mut connection).await?;
        assert_eq!(all, vec![first, second]);
        Ok(())
    }
}
