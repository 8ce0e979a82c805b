use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookQuery, DependOnRentQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnRentModifier, DependOnUserModifier};
use kernel::prelude::entity::{Book, Rent, User};
use kernel::KernelError;

pub use self::{book::*, rent::*, user::*};

mod book;
mod rent;
mod user;

/// Committed rows keyed by id with the sequence that hands out the next id.
/// Ids are never reused, so ascending key order is insertion order.
#[derive(Debug)]
pub(in crate::database) struct Table<T> {
    rows: BTreeMap<i64, T>,
    sequence: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            sequence: 1,
        }
    }
}

impl<T> Table<T> {
    fn apply(&mut self, overlay: Overlay<T>) {
        for (id, change) in overlay.changes {
            match change {
                Some(row) => self.rows.insert(id, row),
                None => self.rows.remove(&id),
            };
        }
        if let Some(sequence) = overlay.sequence {
            self.sequence = sequence;
        }
    }
}

/// Uncommitted changes to one table. `None` marks a deleted row.
#[derive(Debug)]
pub(in crate::database) struct Overlay<T> {
    changes: BTreeMap<i64, Option<T>>,
    sequence: Option<i64>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            changes: BTreeMap::new(),
            sequence: None,
        }
    }
}

/// A table as seen from inside a transaction: its own changes over the committed rows.
pub(in crate::database) struct TableView<'a, T> {
    committed: &'a Table<T>,
    overlay: &'a Overlay<T>,
}

impl<'a, T: Clone> TableView<'a, T> {
    pub fn get(&self, id: i64) -> Option<T> {
        match self.overlay.changes.get(&id) {
            Some(change) => change.clone(),
            None => self.committed.rows.get(&id).cloned(),
        }
    }

    pub fn list_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let committed = self.committed;
        let overlay = self.overlay;
        if overlay.changes.is_empty() {
            return committed.rows.values().collect::<Vec<_>>().into_iter();
        }
        let mut merged = committed
            .rows
            .iter()
            .filter(|(id, _)| !overlay.changes.contains_key(id))
            .map(|(id, row)| (*id, row))
            .collect::<BTreeMap<_, _>>();
        merged.extend(
            overlay
                .changes
                .iter()
                .filter_map(|(id, change)| change.as_ref().map(|row| (*id, row))),
        );
        merged.into_values().collect::<Vec<_>>().into_iter()
    }

    fn sequence(&self) -> i64 {
        self.overlay.sequence.unwrap_or(self.committed.sequence)
    }
}

pub(in crate::database) struct TableMut<'a, T> {
    committed: &'a Table<T>,
    overlay: &'a mut Overlay<T>,
}

impl<'a, T: Clone> TableMut<'a, T> {
    fn view(&self) -> TableView<'_, T> {
        TableView {
            committed: self.committed,
            overlay: &*self.overlay,
        }
    }

    pub fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.view().sequence();
        let row = build(id);
        self.overlay.changes.insert(id, Some(row.clone()));
        self.overlay.sequence = Some(id + 1);
        row
    }

    pub fn put(&mut self, id: i64, row: T) {
        self.overlay.changes.insert(id, Some(row));
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let existed = self.view().get(id).is_some();
        if existed {
            self.overlay.changes.insert(id, None);
        }
        existed
    }
}

#[derive(Debug, Default)]
pub(in crate::database) struct DataStore {
    users: Table<User>,
    books: Table<Book>,
    rents: Table<Rent>,
}

#[derive(Debug, Default)]
struct Staged {
    users: Overlay<User>,
    books: Overlay<Book>,
    rents: Overlay<Rent>,
}

pub(in crate::database) struct StoreView<'a> {
    pub users: TableView<'a, User>,
    pub books: TableView<'a, Book>,
    pub rents: TableView<'a, Rent>,
}

pub(in crate::database) struct StoreMut<'a> {
    pub users: TableMut<'a, User>,
    pub books: TableMut<'a, Book>,
    pub rents: TableMut<'a, Rent>,
}

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<DataStore>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let committed = Arc::clone(&self.store).lock_owned().await;
        Ok(InMemoryTransaction {
            committed,
            staged: Staged::default(),
        })
    }
}

/// Holds the store lock for its whole lifetime.
/// Writes only touch the staged overlays until `commit` applies them.
pub struct InMemoryTransaction {
    committed: OwnedMutexGuard<DataStore>,
    staged: Staged,
}

impl InMemoryTransaction {
    pub(in crate::database) fn read(&self) -> StoreView<'_> {
        let committed = &*self.committed;
        StoreView {
            users: TableView {
                committed: &committed.users,
                overlay: &self.staged.users,
            },
            books: TableView {
                committed: &committed.books,
                overlay: &self.staged.books,
            },
            rents: TableView {
                committed: &committed.rents,
                overlay: &self.staged.rents,
            },
        }
    }

    pub(in crate::database) fn write(&mut self) -> StoreMut<'_> {
        let committed = &*self.committed;
        let staged = &mut self.staged;
        StoreMut {
            users: TableMut {
                committed: &committed.users,
                overlay: &mut staged.users,
            },
            books: TableMut {
                committed: &committed.books,
                overlay: &mut staged.books,
            },
            rents: TableMut {
                committed: &committed.rents,
                overlay: &mut staged.rents,
            },
        }
    }

    fn is_dirty(&self) -> bool {
        !(self.staged.users.changes.is_empty()
            && self.staged.books.changes.is_empty()
            && self.staged.rents.changes.is_empty())
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self {
            mut committed,
            staged,
        } = self;
        let Staged {
            users,
            books,
            rents,
        } = staged;
        tracing::trace!(
            users = users.changes.len(),
            books = books.changes.len(),
            rents = rents.changes.len(),
            "applying staged writes"
        );
        committed.users.apply(users);
        committed.books.apply(books);
        committed.rents.apply(rents);
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        if self.is_dirty() {
            tracing::debug!("discarding staged writes");
        }
        Ok(())
    }
}

impl DependOnUserQuery for InMemoryDatabase {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier for InMemoryDatabase {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnRentQuery for InMemoryDatabase {
    type RentQuery = InMemoryRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &InMemoryRentRepository
    }
}

impl DependOnRentModifier for InMemoryDatabase {
    type RentModifier = InMemoryRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &InMemoryRentRepository
    }
}
