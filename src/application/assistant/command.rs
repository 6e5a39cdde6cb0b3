//! Command parsing
//!
//! A command line is split on whitespace; the first word, lowercased, selects
//! the command and the rest are its arguments. Arity is checked here so the
//! use case only ever sees well-formed commands.

use crate::error::{BotError, BotResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Hello,
    Add { name: String, phones: Vec<String> },
    Change { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    Delete { name: String },
    Help,
    Exit,
}

/// Every command word with its argument synopsis, in help order
pub const COMMANDS: &[(&str, &str)] = &[
    ("hello", ""),
    ("add", "<name> <phone> [phone...]"),
    ("change", "<name> <phone>"),
    ("edit-phone", "<name> <old phone> <new phone>"),
    ("remove-phone", "<name> <phone>"),
    ("phone", "<name>"),
    ("all", ""),
    ("add-birthday", "<name> <DD.MM.YYYY>"),
    ("show-birthday", "<name>"),
    ("birthdays", "[days]"),
    ("del", "<name>"),
    ("help", ""),
    ("close | exit", ""),
];

impl BotCommand {
    /// Parse one input line. A blank line yields `None`.
    pub fn parse(line: &str) -> Option<BotResult<BotCommand>> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_lowercase();
        let args: Vec<String> = words.map(str::to_string).collect();
        Some(Self::from_parts(&command, args))
    }

    /// Build a command from an already split command word and arguments
    pub fn from_parts(command: &str, args: Vec<String>) -> BotResult<BotCommand> {
        match command {
            "hello" => Ok(BotCommand::Hello),
            "add" => {
                let mut args = args.into_iter();
                match (args.next(), args.as_slice().is_empty()) {
                    (Some(name), false) => Ok(BotCommand::Add {
                        name,
                        phones: args.collect(),
                    }),
                    _ => usage("Please provide both name and phone number."),
                }
            }
            "change" => match <[String; 2]>::try_from(args) {
                Ok([name, phone]) => Ok(BotCommand::Change { name, phone }),
                Err(_) => usage("Please provide name and the new phone number."),
            },
            "edit-phone" => match <[String; 3]>::try_from(args) {
                Ok([name, old, new]) => Ok(BotCommand::EditPhone { name, old, new }),
                Err(_) => usage("Please provide name, old and new phone number."),
            },
            "remove-phone" => match <[String; 2]>::try_from(args) {
                Ok([name, phone]) => Ok(BotCommand::RemovePhone { name, phone }),
                Err(_) => usage("Please provide name and phone number."),
            },
            "phone" => single_name(args).map(|name| BotCommand::Phone { name }),
            "all" => Ok(BotCommand::All),
            "add-birthday" => match <[String; 2]>::try_from(args) {
                Ok([name, birthday]) => Ok(BotCommand::AddBirthday { name, birthday }),
                Err(_) => usage("Please provide both name and birthday in the format DD.MM.YYYY."),
            },
            "show-birthday" => single_name(args).map(|name| BotCommand::ShowBirthday { name }),
            "birthdays" => {
                let days = args.first().map(|raw| parse_days(raw)).transpose()?;
                Ok(BotCommand::Birthdays { days })
            }
            "del" => single_name(args).map(|name| BotCommand::Delete { name }),
            "help" => Ok(BotCommand::Help),
            "close" | "exit" => Ok(BotCommand::Exit),
            other => Err(BotError::UnknownCommand {
                command: other.to_string(),
            }),
        }
    }

    /// Whether executing this command can change the book
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            BotCommand::Add { .. }
                | BotCommand::Change { .. }
                | BotCommand::EditPhone { .. }
                | BotCommand::RemovePhone { .. }
                | BotCommand::AddBirthday { .. }
                | BotCommand::Delete { .. }
        )
    }
}

/// Parse a `birthdays` window argument
pub fn parse_days(raw: &str) -> BotResult<u32> {
    raw.parse::<u32>().map_err(|_| BotError::InvalidDays {
        value: raw.to_string(),
    })
}

fn usage<T>(message: &'static str) -> BotResult<T> {
    Err(BotError::Usage { message })
}

fn single_name(args: Vec<String>) -> BotResult<String> {
    match <[String; 1]>::try_from(args) {
        Ok([name]) => Ok(name),
        Err(_) => usage("Please provide name."),
    }
}
