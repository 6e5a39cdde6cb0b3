//! Assistant Use Case
//!
//! Owns the in-memory book for the length of a session and executes commands
//! against it. Persistence goes through the `BookRepository` port.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{AddressBook, Record};
use crate::domain::ports::{BookError, BookRepository, Clock};
use crate::domain::services::upcoming_birthdays;
use crate::domain::value_objects::{Birthday, Name, Phone};
use crate::error::{BotError, BotResult};

use super::{BotCommand, Reply};

pub struct AssistantUseCase {
    repository: Arc<dyn BookRepository>,
    clock: Arc<dyn Clock>,
    book: AddressBook,
    window_days: u32,
    dirty: bool,
}

impl AssistantUseCase {
    /// Load the book from `repository` and start a session over it
    pub fn open(
        repository: Arc<dyn BookRepository>,
        clock: Arc<dyn Clock>,
        window_days: u32,
    ) -> Result<Self, BookError> {
        let book = repository.load()?;
        Ok(Self {
            repository,
            clock,
            book,
            window_days,
            dirty: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn location(&self) -> PathBuf {
        self.repository.location()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Execute a command; failures come back as `Reply::Error`.
    pub fn execute(&mut self, command: BotCommand) -> Reply {
        tracing::debug!(?command, "executing command");
        match self.try_execute(command) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!(kind = err.kind(), "command failed");
                err.into()
            }
        }
    }

    pub fn try_execute(&mut self, command: BotCommand) -> BotResult<Reply> {
        let mutating = command.is_mutating();
        let reply = match command {
            BotCommand::Hello => Reply::Greeting,
            BotCommand::Add { name, phones } => self.add_contact(&name, &phones)?,
            BotCommand::Change { name, phone } => {
                let phone = Phone::parse(&phone)?;
                let record = self.book.get_mut(&name)?;
                record.replace_phones(phone);
                Reply::PhoneUpdated {
                    name: record.name.to_string(),
                }
            }
            BotCommand::EditPhone { name, old, new } => {
                let new = Phone::parse(&new)?;
                let record = self.book.get_mut(&name)?;
                record.edit_phone(&old, new)?;
                Reply::PhoneUpdated {
                    name: record.name.to_string(),
                }
            }
            BotCommand::RemovePhone { name, phone } => {
                let record = self.book.get_mut(&name)?;
                let name = record.name.to_string();
                if !record.remove_phone(&phone) {
                    return Err(BotError::PhoneNotFound { name, phone });
                }
                Reply::PhoneRemoved { name }
            }
            BotCommand::Phone { name } => {
                let record = self.find(&name)?;
                Reply::Phones {
                    name: record.name.to_string(),
                    phones: record.phones.iter().map(|p| p.to_string()).collect(),
                }
            }
            BotCommand::All => Reply::Contacts(self.book.records().to_vec()),
            BotCommand::AddBirthday { name, birthday } => {
                let birthday = Birthday::parse(&birthday, self.clock.today())?;
                let record = self.book.get_mut(&name)?;
                record.set_birthday(birthday);
                Reply::BirthdayAdded {
                    name: record.name.to_string(),
                }
            }
            BotCommand::ShowBirthday { name } => match self.book.find(&name) {
                Some(Record {
                    name,
                    birthday: Some(birthday),
                    ..
                }) => Reply::Birthday {
                    name: name.to_string(),
                    birthday: *birthday,
                },
                _ => return Err(BotError::BirthdayNotSet { name }),
            },
            BotCommand::Birthdays { days } => Reply::Upcoming(upcoming_birthdays(
                &self.book,
                self.clock.today(),
                days.unwrap_or(self.window_days),
            )),
            BotCommand::Delete { name } => {
                let record = self.book.delete(&name)?;
                Reply::ContactDeleted {
                    name: record.name.to_string(),
                }
            }
            BotCommand::Help => Reply::Help,
            BotCommand::Exit => {
                self.save()?;
                Reply::Goodbye
            }
        };

        if mutating {
            self.dirty = true;
        }
        Ok(reply)
    }

    /// Persist the book unconditionally
    pub fn save(&mut self) -> Result<(), BookError> {
        self.repository.save(&self.book)?;
        self.dirty = false;
        tracing::info!(
            location = %self.repository.location().display(),
            contacts = self.book.len(),
            "address book saved"
        );
        Ok(())
    }

    /// Persist only when a command changed the book
    pub fn save_if_dirty(&mut self) -> Result<bool, BookError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn find(&self, name: &str) -> BotResult<&Record> {
        self.book.find(name).ok_or_else(|| BotError::ContactNotFound {
            name: name.to_string(),
        })
    }

    /// Validate every phone before touching the book, then create the contact
    /// or merge the phones into the existing one.
    fn add_contact(&mut self, name: &str, phones: &[String]) -> BotResult<Reply> {
        let phones = phones
            .iter()
            .map(|p| Phone::parse(p))
            .collect::<BotResult<Vec<_>>>()?;
        let name = Name::parse(name)?;

        let reply = Reply::ContactAdded {
            name: name.to_string(),
        };
        if self.book.find(name.as_str()).is_none() {
            self.book.add_record(Record::new(name.clone()));
        }
        let record = self.book.get_mut(name.as_str())?;
        for phone in phones {
            record.add_phone(phone);
        }
        Ok(reply)
    }
}
