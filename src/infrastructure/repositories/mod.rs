//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod book;

pub use book::{TomlBookRepository, DEFAULT_BOOK_FILE};
