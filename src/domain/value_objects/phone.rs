//! Phone number value object
//!
//! A phone is exactly ten ASCII digits. No country codes, separators or
//! leading `+` are accepted.

use std::fmt;

use crate::error::{BotError, BotResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const DIGITS: usize = 10;

    pub fn parse(raw: &str) -> BotResult<Self> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BotError::InvalidPhone {
                value: raw.to_string(),
            })
        }
    }

    /// Check the format without allocating
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        let phone = Phone::parse("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Phone::parse("123456789").is_err());
        assert!(Phone::parse("12345678901").is_err());
        assert!(Phone::parse("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Phone::parse("12345-6789").is_err());
        assert!(Phone::parse("+123456789").is_err());
        assert!(Phone::parse("abcdefghij").is_err());
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are `char::is_numeric` but not ASCII
        assert!(Phone::parse("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn error_carries_rejected_value() {
        let err = Phone::parse("42").unwrap_err();
        assert_eq!(
            err,
            BotError::InvalidPhone {
                value: "42".to_string()
            }
        );
    }
}
