//! Text rendering of command replies
//!
//! With color off the output is exactly the reply text, one line per item.

use assistant_bot::domain::entities::Record;
use assistant_bot::domain::services::UpcomingBirthday;
use assistant_bot::Reply;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{paint, Tone};
use crate::ui::views::help::HelpView;

pub struct ReplyView<'a> {
    reply: &'a Reply,
}

impl<'a> ReplyView<'a> {
    pub fn new(reply: &'a Reply) -> Self {
        Self { reply }
    }

    pub fn render(&self, ui: &UiContext) -> String {
        let c = ui.color;
        match self.reply {
            Reply::Greeting => "How can I help you?".to_string(),
            Reply::ContactAdded { name } => paint(
                &format!("Contact '{}' added successfully.", name),
                Tone::Success,
                c,
            ),
            Reply::PhoneUpdated { name } => paint(
                &format!("Phone number for contact '{}' updated successfully.", name),
                Tone::Success,
                c,
            ),
            Reply::PhoneRemoved { name } => paint(
                &format!("Phone number removed from contact '{}'.", name),
                Tone::Success,
                c,
            ),
            Reply::Phones { name, phones } => {
                format!("Phone numbers for contact '{}': {}", name, phones.join(", "))
            }
            Reply::Contacts(records) => render_contacts(records, c),
            Reply::BirthdayAdded { name } => paint(
                &format!("Birthday added for contact '{}'.", name),
                Tone::Success,
                c,
            ),
            Reply::Birthday { name, birthday } => {
                format!("{}'s birthday is on {}", name, birthday)
            }
            Reply::Upcoming(list) => render_upcoming(list, c),
            Reply::ContactDeleted { name } => paint(
                &format!("Contact '{}' deleted successfully.", name),
                Tone::Success,
                c,
            ),
            Reply::Help => HelpView.render(ui),
            Reply::Goodbye => "Good bye!".to_string(),
            Reply::Error(err) => paint(&err.to_string(), Tone::Error, c),
        }
    }
}

fn render_contacts(records: &[Record], supports_color: bool) -> String {
    if records.is_empty() {
        return paint("No contacts saved.", Tone::Dim, supports_color);
    }
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_upcoming(list: &[UpcomingBirthday], supports_color: bool) -> String {
    if list.is_empty() {
        return paint("No upcoming birthdays.", Tone::Dim, supports_color);
    }
    list.iter()
        .map(|u| format!("{}'s birthday is on {}", u.name, u.date.format("%Y-%m-%d")))
        .collect::<Vec<_>>()
        .join("\n")
}
