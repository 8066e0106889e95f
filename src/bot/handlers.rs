//! Command handlers.
//!
//! Each handler calls into the contact service and turns the result, or the
//! error, into the text the user sees. Nothing here touches stdout.

use crate::bot::command::{Command, ALL_COMMANDS};
use crate::error::BookResult;
use crate::services::{AddContactOutcome, ContactService};
use tracing::warn;

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Check the argument count, then run the command.
pub fn dispatch<S: ContactService + ?Sized>(
    service: &mut S,
    command: Command,
    args: &[&str],
) -> Reply {
    if let Some(expected) = command.arity() {
        if args.len() != expected {
            warn!(?command, got = args.len(), expected, "wrong argument count");
            if args.is_empty() {
                return Reply::Continue("Missing arguments".to_string());
            }
            return Reply::Continue(format!("Usage: {}", command.usage()));
        }
    }

    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(service, args[0], args[1]),
        Command::Change => change_phone(service, args[0], args[1], args[2]),
        Command::Phone => show_phones(service, args[0]),
        Command::All => Ok(service.list_all()),
        Command::AddBirthday => add_birthday(service, args[0], args[1]),
        Command::ShowBirthday => show_birthday(service, args[0]),
        Command::Birthdays => Ok(birthdays(service)),
        Command::Delete => delete_contact(service, args[0]),
        Command::RemovePhone => remove_phone(service, args[0], args[1]),
        Command::Export => Ok(export(service)),
        Command::Help => Ok(help()),
        Command::Exit => return Reply::Exit("Good bye!".to_string()),
    };

    match result {
        Ok(text) => Reply::Continue(text),
        Err(e) => {
            warn!(?command, kind = ?e.kind(), "{}", e);
            Reply::Continue(e.to_string())
        }
    }
}

fn add_contact<S: ContactService + ?Sized>(
    service: &mut S,
    name: &str,
    phone: &str,
) -> BookResult<String> {
    let message = match service.add_contact(name, phone)? {
        AddContactOutcome::Added => "Contact added.",
        AddContactOutcome::Updated => "Contact updated.",
        AddContactOutcome::PhoneAlreadyExists => {
            "This phone number already exists for this contact."
        }
    };
    Ok(message.to_string())
}

fn change_phone<S: ContactService + ?Sized>(
    service: &mut S,
    name: &str,
    old: &str,
    new: &str,
) -> BookResult<String> {
    service.edit_phone(name, old, new)?;
    Ok("Contact updated.".to_string())
}

fn show_phones<S: ContactService + ?Sized>(service: &S, name: &str) -> BookResult<String> {
    let phones = service
        .list_phones(name)?
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join(";");
    Ok(format!("Contacts phones ({}): {}", name, phones))
}

fn add_birthday<S: ContactService + ?Sized>(
    service: &mut S,
    name: &str,
    date: &str,
) -> BookResult<String> {
    service.set_birthday(name, date)?;
    Ok("The birthday added.".to_string())
}

fn show_birthday<S: ContactService + ?Sized>(service: &S, name: &str) -> BookResult<String> {
    Ok(match service.get_birthday(name)? {
        Some(birthday) => birthday.to_string(),
        None => "Birthday is not set".to_string(),
    })
}

fn birthdays<S: ContactService + ?Sized>(service: &S) -> String {
    let upcoming = service.upcoming_birthdays();
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(ToString::to_string));
    lines.join("\n")
}

fn delete_contact<S: ContactService + ?Sized>(service: &mut S, name: &str) -> BookResult<String> {
    service.delete_contact(name)?;
    Ok("Contact deleted.".to_string())
}

fn remove_phone<S: ContactService + ?Sized>(
    service: &mut S,
    name: &str,
    phone: &str,
) -> BookResult<String> {
    service.remove_phone(name, phone)?;
    Ok("Phone removed.".to_string())
}

fn export<S: ContactService + ?Sized>(service: &S) -> String {
    match service.export_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("export failed: {}", e);
            format!("Export failed: {}", e)
        }
    }
}

fn help() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(ALL_COMMANDS.iter().map(|command| format!("  {}", command.usage())));
    lines.join("\n")
}
