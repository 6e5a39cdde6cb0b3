use unicode_width::UnicodeWidthStr;

use assistant_bot::application::assistant::COMMANDS;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{bold, paint, Tone};

pub struct HelpView;

impl HelpView {
    pub fn render(&self, ui: &UiContext) -> String {
        let width = COMMANDS
            .iter()
            .map(|(cmd, _)| UnicodeWidthStr::width(*cmd))
            .max()
            .unwrap_or(0);

        let mut lines = vec![bold("Commands:", ui.color)];
        for (cmd, args) in COMMANDS {
            let pad = " ".repeat(width - UnicodeWidthStr::width(*cmd));
            let line = format!(
                "  {} {}{} {}",
                Icon::Bullet.colored(ui.color, ui.unicode),
                paint(cmd, Tone::Info, ui.color),
                pad,
                paint(args, Tone::Dim, ui.color)
            );
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}
