//! Reply types
//!
//! What executing a command produced. Rendering lives in the binary's `ui`.

use serde::Serialize;

use crate::domain::entities::Record;
use crate::domain::services::UpcomingBirthday;
use crate::domain::value_objects::Birthday;
use crate::error::BotError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    ContactAdded { name: String },
    PhoneUpdated { name: String },
    PhoneRemoved { name: String },
    Phones { name: String, phones: Vec<String> },
    Contacts(Vec<Record>),
    BirthdayAdded { name: String },
    Birthday { name: String, birthday: Birthday },
    Upcoming(Vec<UpcomingBirthday>),
    ContactDeleted { name: String },
    Help,
    Goodbye,
    Error(BotError),
}

impl Reply {
    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Greeting => "greeting",
            Reply::ContactAdded { .. } => "contact_added",
            Reply::PhoneUpdated { .. } => "phone_updated",
            Reply::PhoneRemoved { .. } => "phone_removed",
            Reply::Phones { .. } => "phones",
            Reply::Contacts(_) => "contacts",
            Reply::BirthdayAdded { .. } => "birthday_added",
            Reply::Birthday { .. } => "birthday",
            Reply::Upcoming(_) => "birthdays",
            Reply::ContactDeleted { .. } => "contact_deleted",
            Reply::Help => "help",
            Reply::Goodbye => "goodbye",
            Reply::Error(_) => "error",
        }
    }
}

impl From<BotError> for Reply {
    fn from(err: BotError) -> Self {
        Reply::Error(err)
    }
}

/// JSON shape of a contact
#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for ContactView {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_string(),
            phones: record.phones.iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday.map(|b| b.to_string()),
        }
    }
}
