//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::AssistantUseCase;
use crate::config::Config;
use crate::domain::ports::{BookError, BookRepository, Clock};
use crate::infrastructure::{FixedClock, SystemClock, TomlBookRepository};

/// Pins "today" to a `YYYY-MM-DD` date. Used by integration tests so birthday
/// output does not depend on when they run.
pub const ENV_TODAY: &str = "ASSISTANT_BOT_TODAY";

/// Repository for the book configured in `config`
pub fn create_book_repository(config: &Config) -> Arc<dyn BookRepository> {
    Arc::new(TomlBookRepository::with_path(config.book_path()))
}

/// System clock, unless `ASSISTANT_BOT_TODAY` pins the date
pub fn create_clock() -> Arc<dyn Clock> {
    match std::env::var(ENV_TODAY) {
        Ok(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Arc::new(FixedClock(date)),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring invalid {ENV_TODAY}");
                Arc::new(SystemClock)
            }
        },
        Err(_) => Arc::new(SystemClock),
    }
}

/// Create an assistant use case over the configured book
///
/// Loads the book; a missing file yields an empty book.
pub fn create_assistant_use_case(config: &Config) -> Result<AssistantUseCase, BookError> {
    AssistantUseCase::open(
        create_book_repository(config),
        create_clock(),
        config.birthdays.window_days,
    )
}
