//! Property tests for the upcoming-birthday window.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use assistant_bot::domain::services::upcoming_birthdays;
use assistant_bot::{AddressBook, Birthday, Name, Record};

fn book_of(dates: &[NaiveDate]) -> AddressBook {
    let mut book = AddressBook::new();
    for (i, date) in dates.iter().enumerate() {
        let mut record = Record::new(Name::parse(&format!("P{i}")).unwrap());
        record.set_birthday(Birthday::from_date(*date));
        book.add_record(record);
    }
    book
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every result lies inside the window and results are sorted.
    #[test]
    fn property_results_within_window_and_sorted(
        offsets in proptest::collection::vec(0i64..30_000, 0..12),
        window in 0u32..400,
        today_offset in 0i64..3_000,
    ) {
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(today_offset);
        let dates: Vec<NaiveDate> = offsets.iter().map(|d| today - Duration::days(*d)).collect();
        let result = upcoming_birthdays(&book_of(&dates), today, window);

        for entry in &result {
            prop_assert!(entry.days_until >= 0);
            prop_assert!(entry.days_until <= i64::from(window));
            prop_assert_eq!((entry.date - today).num_days(), entry.days_until);
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
    }
}
