//! Property tests for birthday parsing.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use assistant_bot::Birthday;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn past_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..=60_000).prop_map(|days| today() - Duration::days(days))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any real date up to today, written DD.MM.YYYY, is accepted
    /// and displays back identically.
    #[test]
    fn property_past_dates_accepted(date in past_date()) {
        let raw = date.format("%d.%m.%Y").to_string();
        let birthday = Birthday::parse(&raw, today()).unwrap();
        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), raw);
    }

    /// PROPERTY: Dates after today are rejected.
    #[test]
    fn property_future_dates_rejected(days in 1i64..=20_000) {
        let raw = (today() + Duration::days(days)).format("%d.%m.%Y").to_string();
        prop_assert!(Birthday::parse(&raw, today()).is_err());
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(raw in "\\PC{0,16}") {
        let _ = Birthday::parse(&raw, today());
    }

    /// PROPERTY: The anniversary in any year keeps the month, except
    /// 29 February which may fall back to 28 February.
    #[test]
    fn property_occurrence_stays_in_month(date in past_date(), year in 1900i32..2200) {
        let occurrence = Birthday::from_date(date).occurrence_in(year);
        prop_assert_eq!(chrono::Datelike::year(&occurrence), year);
        prop_assert_eq!(chrono::Datelike::month(&occurrence), chrono::Datelike::month(&date));
    }
}
