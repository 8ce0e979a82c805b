use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BookId, Rent, RentId, UserId};
use crate::KernelError;

/// Listing methods return rents in creation order.
#[async_trait::async_trait]
pub trait RentQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
    /// First rent for the pair that has not been returned yet.
    async fn find_active(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;
}

pub trait DependOnRentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentQuery: RentQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_query(&self) -> &Self::RentQuery;
}
