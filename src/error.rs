//! Error types for the assistant bot
//!
//! Uses `thiserror` for library errors. The `Display` text of each variant is
//! the reply a user sees, so messages are written as full sentences.

use thiserror::Error;

use crate::domain::ports::BookError;

/// Result type alias for assistant operations
pub type BotResult<T> = Result<T, BotError>;

/// Main error type for assistant operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Contact name was blank
    #[error("Name cannot be empty.")]
    EmptyName,

    /// Phone number is not exactly 10 digits
    #[error("Phone number must be 10 digits.")]
    InvalidPhone { value: String },

    /// Birthday does not look like `DD.MM.YYYY`
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthdayFormat { value: String },

    /// Birthday is not a calendar date or lies in the future
    #[error("Invalid date. Please enter a valid date.")]
    InvalidBirthdayDate { value: String },

    /// No contact with the given name
    #[error("Contact not found.")]
    ContactNotFound { name: String },

    /// Contact exists but does not have the given phone
    #[error("Phone number {phone} not found for contact '{name}'.")]
    PhoneNotFound { name: String, phone: String },

    /// Contact exists but has no birthday
    #[error("Birthday information not found.")]
    BirthdayNotSet { name: String },

    /// `birthdays` window argument was not a non-negative integer
    #[error("Number of days must be a non-negative integer.")]
    InvalidDays { value: String },

    /// Wrong number of arguments for a command
    #[error("{message}")]
    Usage { message: &'static str },

    /// Unknown command word
    #[error("Invalid command.")]
    UnknownCommand { command: String },

    /// Persistence failure
    #[error(transparent)]
    Book(#[from] BookError),
}

impl BotError {
    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::EmptyName => "empty_name",
            BotError::InvalidPhone { .. } => "invalid_phone",
            BotError::InvalidBirthdayFormat { .. } => "invalid_birthday_format",
            BotError::InvalidBirthdayDate { .. } => "invalid_birthday_date",
            BotError::ContactNotFound { .. } => "contact_not_found",
            BotError::PhoneNotFound { .. } => "phone_not_found",
            BotError::BirthdayNotSet { .. } => "birthday_not_set",
            BotError::InvalidDays { .. } => "invalid_days",
            BotError::Usage { .. } => "usage",
            BotError::UnknownCommand { .. } => "unknown_command",
            BotError::Book(_) => "book",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_phone() {
        let err = BotError::InvalidPhone {
            value: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    }

    #[test]
    fn test_error_display_phone_not_found() {
        let err = BotError::PhoneNotFound {
            name: "John".to_string(),
            phone: "1112223333".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Phone number 1112223333 not found for contact 'John'."
        );
    }

    #[test]
    fn test_error_display_usage_is_message() {
        let err = BotError::Usage {
            message: "Please provide name.",
        };
        assert_eq!(err.to_string(), "Please provide name.");
        assert_eq!(err.kind(), "usage");
    }
}
