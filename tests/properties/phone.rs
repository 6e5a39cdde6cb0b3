//! Property tests for phone validation.

use proptest::prelude::*;

use assistant_bot::Phone;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any 10 ASCII digits form a valid phone that displays unchanged.
    #[test]
    fn property_ten_digits_accepted(raw in "[0-9]{10}") {
        let phone = Phone::parse(&raw).unwrap();
        prop_assert_eq!(phone.as_str(), raw.as_str());
    }

    /// PROPERTY: Digit strings of any other length are rejected.
    #[test]
    fn property_wrong_length_rejected(raw in "[0-9]{0,9}|[0-9]{11,16}") {
        prop_assert!(Phone::parse(&raw).is_err());
    }

    /// PROPERTY: Validation never panics and agrees with `is_valid`.
    #[test]
    fn property_parse_matches_is_valid(raw in "\\PC{0,20}") {
        prop_assert_eq!(Phone::parse(&raw).is_ok(), Phone::is_valid(&raw));
    }
}
