//! Domain Entities
//!
//! - `Record` - one contact
//! - `AddressBook` - all contacts, keyed by name

mod address_book;
mod record;

pub use address_book::AddressBook;
pub use record::Record;
