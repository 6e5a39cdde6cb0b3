//! Birthday value object
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY`. The format is checked
//! before the calendar so that `1.2.1990` is a format error, not a date error.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{BotError, BotResult};

static BIRTHDAY_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub const FORMAT: &'static str = "%d.%m.%Y";

    /// Parse `DD.MM.YYYY`, rejecting dates after `today`.
    pub fn parse(raw: &str, today: NaiveDate) -> BotResult<Self> {
        if !BIRTHDAY_FORMAT.is_match(raw) {
            return Err(BotError::InvalidBirthdayFormat {
                value: raw.to_string(),
            });
        }

        let date = NaiveDate::parse_from_str(raw, Self::FORMAT).map_err(|_| {
            BotError::InvalidBirthdayDate {
                value: raw.to_string(),
            }
        })?;

        if date > today {
            return Err(BotError::InvalidBirthdayDate {
                value: raw.to_string(),
            });
        }

        Ok(Self(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary in `year`. 29 February falls on 28 February in
    /// non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
