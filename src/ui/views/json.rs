//! JSON shape of command replies

use assistant_bot::application::assistant::COMMANDS;
use assistant_bot::application::ContactView;
use assistant_bot::Reply;
use serde_json::{json, Value};

pub fn reply_json(reply: &Reply) -> Value {
    let kind = reply.kind();
    match reply {
        Reply::Greeting | Reply::Goodbye => json!({
            "type": kind,
        }),
        Reply::ContactAdded { name }
        | Reply::PhoneUpdated { name }
        | Reply::PhoneRemoved { name }
        | Reply::BirthdayAdded { name }
        | Reply::ContactDeleted { name } => json!({
            "type": kind,
            "name": name,
        }),
        Reply::Phones { name, phones } => json!({
            "type": kind,
            "name": name,
            "phones": phones,
        }),
        Reply::Contacts(records) => {
            let contacts: Vec<ContactView> = records.iter().map(ContactView::from).collect();
            json!({
                "type": kind,
                "count": contacts.len(),
                "contacts": contacts,
            })
        }
        Reply::Birthday { name, birthday } => json!({
            "type": kind,
            "name": name,
            "birthday": birthday.to_string(),
        }),
        Reply::Upcoming(list) => json!({
            "type": kind,
            "count": list.len(),
            "birthdays": list,
        }),
        Reply::Help => {
            let commands: Vec<Value> = COMMANDS
                .iter()
                .map(|(command, args)| json!({ "command": command, "args": args }))
                .collect();
            json!({
                "type": kind,
                "commands": commands,
            })
        }
        Reply::Error(err) => json!({
            "type": kind,
            "kind": err.kind(),
            "message": err.to_string(),
        }),
    }
}
