//! BookRepository port
//!
//! Loads and persists the address book.

use std::path::PathBuf;

use crate::domain::entities::AddressBook;

pub trait BookRepository: Send + Sync {
    /// Load the book. A missing book is an empty book, not an error.
    fn load(&self) -> Result<AddressBook, BookError>;
    fn save(&self, book: &AddressBook) -> Result<(), BookError>;
    /// Where the book lives, for display
    fn location(&self) -> PathBuf;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Failed to access address book: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize address book: {message}")]
    SerializationError { message: String },

    #[error(
        "address book file corrupted: {path}\n  → Fix: repair the file by hand or move it aside\n  → Run: mv {path} {path}.bak\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
