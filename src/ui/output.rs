use std::io::{self, Write};

use assistant_bot::Reply;

use crate::ui::context::UiContext;
use crate::ui::json::write_event;
use crate::ui::views::json::reply_json;
use crate::ui::views::reply::ReplyView;

/// Write one reply: a JSON line in `--json` mode, otherwise its text.
pub fn write_reply(out: &mut impl Write, reply: &Reply, ui: &UiContext) -> io::Result<()> {
    if ui.json {
        return write_event(out, &reply_json(reply));
    }
    writeln!(out, "{}", ReplyView::new(reply).render(ui))
}
