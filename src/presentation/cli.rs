//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --book, --config) are inherited by all subcommands
//! - Without a subcommand the binary starts an interactive session

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::BotCommand;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Assistant bot - address book with birthday reminders
#[derive(Parser, Debug)]
#[command(name = "assistant-bot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'assistant-bot' without arguments for an interactive session.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Address book file (default: ./addressbook.toml)
    #[arg(long, global = true)]
    pub book: Option<PathBuf>,

    /// Config file (default: ~/.config/assistant-bot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (default)
    Chat,

    /// Greet the bot
    #[command(hide = true)]
    Hello,

    /// Add a contact, or add phones to an existing one
    Add {
        name: String,
        /// One or more 10-digit phone numbers
        #[arg(required = true)]
        phones: Vec<String>,
    },

    /// Replace all phones of a contact with one number
    Change { name: String, phone: String },

    /// Replace one phone of a contact
    EditPhone {
        name: String,
        old: String,
        new: String,
    },

    /// Remove one phone from a contact
    RemovePhone { name: String, phone: String },

    /// Show the phones of a contact
    Phone { name: String },

    /// List all contacts
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays in the coming days
    Birthdays {
        /// Days to look ahead (default from config, 7)
        days: Option<u32>,
    },

    /// Delete a contact
    #[command(alias = "delete")]
    Del { name: String },
}

impl Commands {
    /// The bot command this subcommand runs; `None` for the interactive session
    pub fn into_bot_command(self) -> Option<BotCommand> {
        let command = match self {
            Commands::Chat => return None,
            Commands::Hello => BotCommand::Hello,
            Commands::Add { name, phones } => BotCommand::Add { name, phones },
            Commands::Change { name, phone } => BotCommand::Change { name, phone },
            Commands::EditPhone { name, old, new } => BotCommand::EditPhone { name, old, new },
            Commands::RemovePhone { name, phone } => BotCommand::RemovePhone { name, phone },
            Commands::Phone { name } => BotCommand::Phone { name },
            Commands::All => BotCommand::All,
            Commands::AddBirthday { name, birthday } => BotCommand::AddBirthday { name, birthday },
            Commands::ShowBirthday { name } => BotCommand::ShowBirthday { name },
            Commands::Birthdays { days } => BotCommand::Birthdays { days },
            Commands::Del { name } => BotCommand::Delete { name },
        };
        Some(command)
    }
}
