//! Clock port
//!
//! Birthday validation and reminders depend on the current date.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
