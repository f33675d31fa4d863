//! Command handlers.
//!
//! Each handler mutates or queries the address book and produces the text
//! shown to the user. Failures come back as [`CommandError`] for the shell to
//! render; nothing here writes to the terminal.

use super::parser::Command;
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading commands
    Continue(String),
    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    /// The text to show the user, whichever way the session continues.
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }
}

/// Run `command` against `book`. `today` anchors the birthday window.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<Reply> {
    tracing::debug!(?command, "Executing command");

    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => add_contact(book, &name, &phone)?,
        Command::Change { name, old, new } => change_contact(book, &name, &old, &new)?,
        Command::Phone { name } => show_phones(book, &name)?,
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday)?,
        Command::ShowBirthday { name } => show_birthday(book, &name)?,
        Command::Birthdays => birthdays(book, today),
        Command::Delete { name } => {
            book.delete(&name)
                .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
            tracing::info!(name = %name, "Contact deleted");
            "Contact deleted.".to_string()
        }
        Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
    };

    Ok(Reply::Continue(message))
}

fn find<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        tracing::info!(name = %name, "Phone added to existing contact");
        return Ok("Contact updated.".to_string());
    }

    // Insert only once the phone has validated
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    tracing::info!(name = %name, "Contact added");
    Ok("Contact added.".to_string())
}

fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    let record = find_mut(book, name)?;
    if record.find_phone(old).is_none() {
        return Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: old.to_string(),
        });
    }
    record.edit_phone(old, new)?;
    tracing::info!(name = %name, "Phone changed");
    Ok("Contact updated.".to_string())
}

fn show_phones(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = find(book, name)?;
    if record.phones().is_empty() {
        return Ok(format!("No phones saved for {}.", name));
    }
    Ok(record.phones_joined())
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.to_string()
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    let birthday = Birthday::parse(birthday)?;
    find_mut(book, name)?.add_birthday(birthday)?;
    tracing::info!(name = %name, "Birthday added");
    Ok("Birthday added.".to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = find(book, name)?;
    Ok(match record.show_birthday() {
        Some(birthday) => birthday.to_string(),
        None => format!("Birthday is not set for {}.", name),
    })
}

fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays_from(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date()))
        .collect::<Vec<_>>()
        .join("\n")
}
