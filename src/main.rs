//! Assistant bot - command-line address book
//!
//! Usage: assistant-bot [COMMAND]
//!
//! Without a command the bot starts an interactive session:
//!   add <name> <phone>...    Add a contact or more phones
//!   phone <name>             Show a contact's phones
//!   birthdays [days]         Upcoming birthdays
//!   close | exit             Save and quit

use anyhow::Result;
use clap::Parser;

use assistant_bot::config::Config;
use assistant_bot::logging;
use assistant_bot::presentation::Cli;

mod commands;
mod ui;

use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let mut config = Config::load_or_default(cli.config.as_deref());
    if let Some(book) = cli.book {
        config.storage.path = Some(book);
    }
    let ui = UiContext::new(cli.json, cli.color, &config);
    tracing::debug!(book = %config.book_path().display(), "resolved book location");

    match cli.command.and_then(|c| c.into_bot_command()) {
        None => commands::session::cmd_chat(&config, ui),
        Some(command) => commands::run::cmd_run(command, &config, ui),
    }
}
