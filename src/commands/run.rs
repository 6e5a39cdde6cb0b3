//! One-shot commands
//!
//! Runs a single command against the book, saves if it changed anything and
//! prints the reply. A rejected command is returned as an error so the
//! process exits non-zero.

use std::io::{self, Write};

use anyhow::Result;

use assistant_bot::config::Config;
use assistant_bot::presentation::factory::create_assistant_use_case;
use assistant_bot::{BotCommand, Reply};

use crate::ui::context::UiContext;
use crate::ui::output::write_reply;

pub fn cmd_run(command: BotCommand, config: &Config, ui: UiContext) -> Result<()> {
    let mut assistant = create_assistant_use_case(config)?;

    let reply = assistant.execute(command);
    if let Reply::Error(err) = reply {
        return Err(err.into());
    }

    if assistant.save_if_dirty()? {
        tracing::debug!(book = %assistant.location().display(), "book updated");
    }

    let mut out = io::stdout().lock();
    write_reply(&mut out, &reply, &ui)?;
    out.flush()?;
    Ok(())
}
