//! Domain Layer
//!
//! Pure address book logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated values (Name, Phone, Birthday)
//! - `entities/` - Record and AddressBook
//! - `services/` - Upcoming birthday calculation
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
