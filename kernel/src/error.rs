use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    UserNotFound,
    UserInactive,
    AlreadyBorrowed,
    BookNotFound,
    BookUnavailable,
    CannotReturn,
    Internal,
}

/// Coarse classification used by outer layers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Conflict,
    Internal,
}

impl KernelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KernelError::UserNotFound | KernelError::BookNotFound => ErrorKind::NotFound,
            KernelError::UserInactive
            | KernelError::BookUnavailable
            | KernelError::CannotReturn => ErrorKind::InvalidState,
            KernelError::AlreadyBorrowed => ErrorKind::Conflict,
            KernelError::Internal => ErrorKind::Internal,
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::UserNotFound => write!(f, "User not found"),
            KernelError::UserInactive => write!(f, "User is inactive"),
            KernelError::AlreadyBorrowed => write!(f, "Book already borrowed by the user"),
            KernelError::BookNotFound => write!(f, "Book not found"),
            KernelError::BookUnavailable => write!(f, "Book is not available for borrowing"),
            KernelError::CannotReturn => write!(
                f,
                "Cannot return book. Check if borrow record exists and book is not already returned."
            ),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

#[cfg(test)]
mod test {
    use super::{ErrorKind, KernelError};

    #[test]
    fn borrow_failures_are_classified() {
        assert_eq!(KernelError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(KernelError::BookNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(KernelError::UserInactive.kind(), ErrorKind::InvalidState);
        assert_eq!(KernelError::BookUnavailable.kind(), ErrorKind::InvalidState);
        assert_eq!(KernelError::CannotReturn.kind(), ErrorKind::InvalidState);
        assert_eq!(KernelError::AlreadyBorrowed.kind(), ErrorKind::Conflict);
    }
}
