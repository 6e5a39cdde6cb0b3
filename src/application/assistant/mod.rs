//! Assistant Module
//!
//! Turns typed commands into changes to the address book.
//!
//! ## Structure
//!
//! - `command` - Line parsing (`BotCommand`)
//! - `reply` - Outcomes (`Reply`)
//! - `use_case` - Session state and execution (`AssistantUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use assistant_bot::application::assistant::{AssistantUseCase, BotCommand};
//!
//! let mut assistant = AssistantUseCase::open(repo, clock, 7)?;
//! if let Some(Ok(cmd)) = BotCommand::parse("add John 1234567890") {
//!     let reply = assistant.execute(cmd);
//! }
//! ```

mod command;
mod reply;
mod use_case;

pub use command::{parse_days, BotCommand, COMMANDS};
pub use reply::{ContactView, Reply};
pub use use_case::AssistantUseCase;
