//! Record entity
//!
//! One contact: a name, its phone numbers in the order they were added, and an
//! optional birthday.

use std::fmt;

use crate::domain::value_objects::{Birthday, Name, Phone};
use crate::error::{BotError, BotResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone. Adding a number the record already has is a no-op.
    pub fn add_phone(&mut self, phone: Phone) {
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
    }

    /// Remove every occurrence of `phone`. Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let len_before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != len_before
    }

    pub fn edit_phone(&mut self, old: &str, new: Phone) -> BotResult<()> {
        let Some(pos) = self.phones.iter().position(|p| p.as_str() == old) else {
            return Err(BotError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            });
        };

        if self.phones.iter().any(|p| *p == new) {
            self.phones.remove(pos);
        } else {
            self.phones[pos] = new;
        }
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Drop all phones and keep only `phone`.
    pub fn replace_phones(&mut self, phone: Phone) {
        self.phones.clear();
        self.phones.push(phone);
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
