//! Domain Services
//!
//! Stateless calculations over entities.

mod upcoming_birthdays;

pub use upcoming_birthdays::{upcoming_birthdays, UpcomingBirthday};
