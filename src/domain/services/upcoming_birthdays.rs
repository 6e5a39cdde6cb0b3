//! Upcoming birthday calculation
//!
//! Pure function of the book, the current date and a window size. The
//! clock is injected so results are reproducible in tests.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::entities::AddressBook;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
    pub days_until: i64,
}

/// Birthdays falling within `window_days` of `today`, inclusive on both ends.
///
/// A birthday that already passed this year is counted against next year.
/// Results are sorted by date, then by name.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = book
        .records()
        .iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            let mut next = birthday.occurrence_in(today.year());
            if next < today {
                next = birthday.occurrence_in(today.year() + 1);
            }
            let days_until = (next - today).num_days();
            (days_until <= i64::from(window_days)).then(|| UpcomingBirthday {
                name: record.name.to_string(),
                date: next,
                days_until,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    upcoming
}
