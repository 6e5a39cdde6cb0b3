//! TOML Book Repository
//!
//! Persists the address book as a TOML document. Saves take an exclusive lock
//! on a sibling `<file name>.lock` file and replace the book atomically.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{AddressBook, Record};
use crate::domain::ports::{BookError, BookRepository};
use crate::domain::value_objects::{Birthday, Name, Phone};

pub const DEFAULT_BOOK_FILE: &str = "addressbook.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlContact {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlBook {
    version: u32,
    #[serde(default)]
    contacts: Vec<TomlContact>,
}

pub struct TomlBookRepository {
    path: PathBuf,
}

impl TomlBookRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<book file name>.lock` next to the book, e.g. `people.toml.lock`
    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_BOOK_FILE));
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn corrupted(&self, message: impl Into<String>) -> BookError {
        BookError::Corrupted {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<(), BookError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(access_error)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(access_error)?;
        tmp.write_all(content.as_bytes()).map_err(access_error)?;
        tmp.as_file().sync_all().map_err(access_error)?;
        tmp.persist(&self.path)
            .map_err(|e| access_error(e.error))?;
        Ok(())
    }
}

impl BookRepository for TomlBookRepository {
    fn load(&self) -> Result<AddressBook, BookError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no address book yet, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access_error)?;
        let toml_book: TomlBook =
            toml::from_str(&content).map_err(|e| self.corrupted(e.to_string()))?;

        let book = from_toml(toml_book).map_err(|message| self.corrupted(message))?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), BookError> {
        let content = toml::to_string_pretty(&to_toml(book)).map_err(|e| {
            BookError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(access_error)?;
            }
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = self.write_atomic(&content);

        let _ = lock_file.unlock();
        if result.is_ok() {
            tracing::debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        }
        result
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

fn access_error(e: std::io::Error) -> BookError {
    BookError::AccessError {
        message: e.to_string(),
    }
}

fn from_toml(toml_book: TomlBook) -> Result<AddressBook, String> {
    let mut book = AddressBook::new();
    book.version = toml_book.version;

    for contact in toml_book.contacts {
        let name = Name::parse(&contact.name).map_err(|e| format!("contact name: {e}"))?;
        let mut record = Record::new(name);

        for phone in &contact.phones {
            let phone = Phone::parse(phone)
                .map_err(|_| format!("contact '{}': invalid phone '{}'", contact.name, phone))?;
            record.add_phone(phone);
        }

        if let Some(raw) = &contact.birthday {
            let date = NaiveDate::parse_from_str(raw, Birthday::FORMAT)
                .map_err(|_| format!("contact '{}': invalid birthday '{}'", contact.name, raw))?;
            record.set_birthday(Birthday::from_date(date));
        }

        book.add_record(record);
    }

    Ok(book)
}

fn to_toml(book: &AddressBook) -> TomlBook {
    TomlBook {
        version: book.version,
        contacts: book
            .records()
            .iter()
            .map(|r| TomlContact {
                name: r.name.to_string(),
                phones: r.phones.iter().map(|p| p.to_string()).collect(),
                birthday: r.birthday.map(|b| b.to_string()),
            })
            .collect(),
    }
}
