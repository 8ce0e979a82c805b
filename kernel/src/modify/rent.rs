use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BookId, BorrowDate, Rent, RentId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Assigns the next rent id. The rent starts outstanding.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        user_id: UserId,
        book_id: BookId,
        borrow_date: BorrowDate,
    ) -> error_stack::Result<Rent, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns `false` when no rent had this id.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        rent_id: &RentId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnRentModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentModifier: RentModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
