//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssistantUseCase` - Executes bot commands against the address book

pub mod assistant;

pub use assistant::{AssistantUseCase, BotCommand, ContactView, Reply};
