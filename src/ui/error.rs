use assistant_bot::domain::ports::BookError;
use assistant_bot::BotError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

/// Exit code for a command that ran but was rejected (bad input, unknown contact)
pub const EXIT_COMMAND_FAILED: i32 = 1;
/// Exit code for an unusable address book file
pub const EXIT_BOOK_UNAVAILABLE: i32 = 2;

pub fn exit_code(err: &anyhow::Error) -> i32 {
    let book_error = err.downcast_ref::<BookError>().is_some()
        || matches!(err.downcast_ref::<BotError>(), Some(BotError::Book(_)));
    if book_error {
        EXIT_BOOK_UNAVAILABLE
    } else {
        EXIT_COMMAND_FAILED
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        paint(&format!("{:#}", err), Tone::Error, supports_color)
    )
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "type": "error",
            "kind": err
                .downcast_ref::<BotError>()
                .map(BotError::kind)
                .unwrap_or("fatal"),
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
