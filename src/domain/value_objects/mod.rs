//! Domain Value Objects
//!
//! Immutable, validated value types. Constructing one is the validation.

mod birthday;
mod name;
mod phone;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;
