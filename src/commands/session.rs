//! Interactive session
//!
//! Reads one command per line until `close`/`exit` or end of input. Both end
//! the session the same way: the book is saved and the bot says goodbye.
//! Lines that are not valid UTF-8 are decoded lossily rather than ending the
//! session; a failing input stream still saves pending changes.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use assistant_bot::config::Config;
use assistant_bot::presentation::factory::create_assistant_use_case;
use assistant_bot::{AssistantUseCase, BotCommand, Reply};

use crate::ui::context::UiContext;
use crate::ui::output::write_reply;
use crate::ui::theme::{PROMPT, WELCOME};

pub fn cmd_chat(config: &Config, ui: UiContext) -> Result<()> {
    let mut assistant = create_assistant_use_case(config)?;
    tracing::info!(
        book = %assistant.location().display(),
        contacts = assistant.book().len(),
        "session started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut assistant, stdin.lock(), stdout.lock(), &ui)
}

pub fn run_session(
    assistant: &mut AssistantUseCase,
    mut input: impl BufRead,
    mut output: impl Write,
    ui: &UiContext,
) -> Result<()> {
    if !ui.json {
        writeln!(output, "{}", WELCOME)?;
    }

    let mut buf = Vec::new();
    loop {
        if !ui.json {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        buf.clear();
        let read = match input.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(err) => {
                tracing::warn!(error = %err, "input failed, saving before exit");
                assistant.save_if_dirty()?;
                return Err(err.into());
            }
        };

        let command = if read == 0 {
            if !ui.json {
                writeln!(output)?;
            }
            BotCommand::Exit
        } else {
            match BotCommand::parse(&String::from_utf8_lossy(&buf)) {
                None => continue,
                Some(Ok(command)) => command,
                Some(Err(err)) => {
                    write_reply(&mut output, &Reply::from(err), ui)?;
                    continue;
                }
            }
        };

        if command == BotCommand::Exit {
            let reply = assistant.try_execute(command)?;
            write_reply(&mut output, &reply, ui)?;
            output.flush()?;
            return Ok(());
        }

        let reply = assistant.execute(command);
        write_reply(&mut output, &reply, ui)?;
    }
}
