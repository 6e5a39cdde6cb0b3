//! AddressBook entity
//!
//! Records keyed by name. Listing order is insertion order, so `all` shows
//! contacts in the order they were first added. Lookups trim the key the same
//! way `Name::parse` does.

use crate::domain::entities::Record;
use crate::error::{BotError, BotResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    pub version: u32,
    pub records: Vec<Record>,
}

impl AddressBook {
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            records: Vec::new(),
        }
    }

    /// Insert `record`, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.name == record.name) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|pos| &mut self.records[pos])
    }

    /// Like `find_mut` but a missing contact is an error.
    pub fn get_mut(&mut self, name: &str) -> BotResult<&mut Record> {
        self.find_mut(name).ok_or_else(|| BotError::ContactNotFound {
            name: name.to_string(),
        })
    }

    pub fn delete(&mut self, name: &str) -> BotResult<Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| BotError::ContactNotFound {
                name: name.to_string(),
            })?;
        Ok(self.records.remove(pos))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim();
        self.records.iter().position(|r| r.name == *key)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}
