//! Domain Ports (Interfaces)
//!
//! Traits the infrastructure layer implements.

pub mod book_repository;
pub mod clock;

pub use book_repository::{BookError, BookRepository};
pub use clock::Clock;
