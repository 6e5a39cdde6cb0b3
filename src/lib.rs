//! Assistant bot - command-line address book
//!
//! Contacts carry a name, 10-digit phone numbers and an optional birthday.
//! The bot answers typed commands (`add`, `phone`, `birthdays`, ...) either
//! in an interactive session or as one-shot subcommands, and persists the
//! book to a TOML file between runs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssistantUseCase, BotCommand, Reply};
pub use config::Config;
pub use domain::entities::{AddressBook, Record};
pub use domain::value_objects::{Birthday, Name, Phone};
pub use error::{BotError, BotResult};
