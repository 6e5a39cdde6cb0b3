//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! ## Structure
//!
//! - `repositories/` - Book persistence
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod repositories;

pub use clock::{FixedClock, SystemClock};
pub use repositories::TomlBookRepository;
