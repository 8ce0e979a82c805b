use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{BookId, BorrowDate, Rent, RentId, UserId};
use kernel::KernelError;

use crate::database::inmemory::InMemoryTransaction;

pub struct InMemoryRentRepository;

#[async_trait::async_trait]
impl RentQuery for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        Ok(con.read().rents.get(*id.as_ref()))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        Ok(con.read().rents.list_all())
    }

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        let rents = con
            .read()
            .rents
            .iter()
            .filter(|rent| rent.user_id() == user_id)
            .cloned()
            .collect();
        Ok(rents)
    }

    async fn find_active(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        let rent = con
            .read()
            .rents
            .iter()
            .find(|rent| rent.user_id() == user_id && rent.book_id() == book_id && rent.is_active())
            .cloned();
        Ok(rent)
    }
}

#[async_trait::async_trait]
impl RentModifier for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        user_id: UserId,
        book_id: BookId,
        borrow_date: BorrowDate,
    ) -> error_stack::Result<Rent, KernelError> {
        let rent = con
            .write()
            .rents
            .insert(|id| Rent::new(RentId::new(id), user_id, book_id, borrow_date, None));
        Ok(rent)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError> {
        con.write().rents.put(*rent.id().as_ref(), rent.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        rent_id: &RentId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.write().rents.delete(*rent_id.as_ref()))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::RentQuery;
    use kernel::interface::update::RentModifier;
    use kernel::prelude::entity::{BookId, BorrowDate, RentId, ReturnDate, UserId};
    use kernel::KernelError;

    use crate::database::inmemory::{InMemoryDatabase, InMemoryRentRepository};

    #[tokio::test]
    async fn find_active_skips_returned() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let user_id = UserId::new(1);
        let book_id = BookId::new(1);
        let borrowed = BorrowDate::new(date!(2024 - 01 - 01));

        let first = InMemoryRentRepository
            .create(&mut con, user_id, book_id, borrowed)
            .await?;
        assert_eq!(first.id(), &RentId::new(1));
        assert!(first.is_active());

        let found = InMemoryRentRepository
            .find_active(&mut con, &user_id, &book_id)
            .await?;
        assert_eq!(found, Some(first.clone()));

        let returned =
            first.reconstruct(|r| r.return_date = Some(ReturnDate::new(date!(2024 - 01 - 05))));
        InMemoryRentRepository.update(&mut con, &returned).await?;

        let found = InMemoryRentRepository
            .find_active(&mut con, &user_id, &book_id)
            .await?;
        assert!(found.is_none());

        let second = InMemoryRentRepository
            .create(&mut con, user_id, book_id, borrowed)
            .await?;
        let found = InMemoryRentRepository
            .find_active(&mut con, &user_id, &book_id)
            .await?;
        assert_eq!(found, Some(second));
        Ok(())
    }

    #[tokio::test]
    async fn find_by_user_keeps_creation_order() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let borrowed = BorrowDate::new(date!(2024 - 03 - 10));
        let alice = UserId::new(1);
        let bob = UserId::new(2);

        let a1 = InMemoryRentRepository
            .create(&mut con, alice, BookId::new(3), borrowed)
            .await?;
        let b1 = InMemoryRentRepository
            .create(&mut con, bob, BookId::new(1), borrowed)
            .await?;
        let a2 = InMemoryRentRepository
            .create(&mut con, alice, BookId::new(2), borrowed)
            .await?;

        let of_alice = InMemoryRentRepository
            .find_by_user_id(&mut con, &alice)
            .await?;
        assert_eq!(of_alice, vec![a1.clone(), a2.clone()]);

        let all = InMemoryRentRepository.find_all(&mut con).await?;
        assert_eq!(all, vec![a1, b1, a2]);

        let nobody = InMemoryRentRepository
            .find_by_user_id(&mut con, &UserId::new(99))
            .await?;
        assert!(nobody.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_rent() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let borrowed = BorrowDate::new(date!(2024 - 02 - 01));
        let rent = InMemoryRentRepository
            .create(&mut con, UserId::new(1), BookId::new(1), borrowed)
            .await?;

        assert!(InMemoryRentRepository.delete(&mut con, rent.id()).await?);
        assert!(!InMemoryRentRepository.delete(&mut con, rent.id()).await?);
        assert!(InMemoryRentRepository
            .find_by_id(&mut con, rent.id())
            .await?
            .is_none());

        let next = InMemoryRentRepository
            .create(&mut con, UserId::new(1), BookId::new(1), borrowed)
            .await?;
        assert_eq!(next.id(), &RentId::new(2));
        Ok(())
    }
}
