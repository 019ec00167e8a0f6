//! Per-command handlers.
//!
//! Each handler takes the positional arguments and the directory, and
//! returns either the reply text or a `CommandError` for the dispatch
//! boundary to render. Lookup failures take precedence over field
//! validation, so `change` on a missing contact reports the contact
//! before complaining about a malformed replacement number.

use crate::directory::Directory;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::models::Record;
use chrono::NaiveDate;

pub(super) const NO_CONTACTS: &str = "No contacts.";
pub(super) const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next week.";

const USAGE_ADD: &str = "add <name> [phone]";
const USAGE_CHANGE: &str = "change <name> <old_phone> <new_phone>";
const USAGE_PHONE: &str = "phone <name>";
const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";

fn arg<'a>(args: &[&'a str], index: usize, usage: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::MissingArgument(usage))
}

/// `add <name> [phone]`: upsert by name, then append the phone if given.
///
/// The upsert happens before phone validation, so a bad phone still
/// leaves the (possibly new) record in place.
pub(super) fn add_contact(args: &[&str], directory: &mut Directory) -> CommandResult<String> {
    let name = arg(args, 0, USAGE_ADD)?;

    let message = if directory.find(name).is_some() {
        "Contact updated."
    } else {
        directory.add_record(Record::new(ContactName::new(name)?));
        "Contact added."
    };

    if let Some(&value) = args.get(1) {
        let phone = PhoneNumber::new(value)?;
        if let Some(record) = directory.find_mut(name) {
            record.add_phone(phone);
        }
    }

    Ok(message.to_string())
}

/// `change <name> <old> <new>`: replace the first phone equal to `old`.
pub(super) fn change_phone(args: &[&str], directory: &mut Directory) -> CommandResult<String> {
    let name = arg(args, 0, USAGE_CHANGE)?;
    let old = arg(args, 1, USAGE_CHANGE)?;
    let new = arg(args, 2, USAGE_CHANGE)?;

    let record = directory
        .find_mut(name)
        .ok_or(DirectoryError::ContactNotFound)?;
    if !record.phones().iter().any(|p| p.as_str() == old) {
        return Err(DirectoryError::PhoneNotFound.into());
    }

    record.edit_phone(old, PhoneNumber::new(new)?)?;
    Ok("Phone changed.".to_string())
}

/// `phone <name>`: the contact's numbers, comma-joined.
pub(super) fn show_phones(args: &[&str], directory: &Directory) -> CommandResult<String> {
    let name = arg(args, 0, USAGE_PHONE)?;
    let record = directory.find(name).ok_or(DirectoryError::ContactNotFound)?;

    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}'s phones: {}", name, phones))
}

/// `all`: every record's rendering, one per line, in directory order.
pub(super) fn list_all(directory: &Directory) -> String {
    if directory.is_empty() {
        return NO_CONTACTS.to_string();
    }
    directory
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <date>`: set or overwrite the contact's birthday.
pub(super) fn add_birthday(args: &[&str], directory: &mut Directory) -> CommandResult<String> {
    let name = arg(args, 0, USAGE_ADD_BIRTHDAY)?;
    let value = arg(args, 1, USAGE_ADD_BIRTHDAY)?;

    let record = directory
        .find_mut(name)
        .ok_or(DirectoryError::ContactNotFound)?;
    record.set_birthday(Birthday::new(value)?);
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`: the stored birthday, or the "not set" text.
pub(super) fn show_birthday(args: &[&str], directory: &Directory) -> CommandResult<String> {
    let name = arg(args, 0, USAGE_SHOW_BIRTHDAY)?;
    let record = directory.find(name).ok_or(DirectoryError::ContactNotFound)?;
    Ok(format!("{}'s birthday is {}", name, record.birthday_display()))
}

/// `birthdays`: records with a birthday inside the lookahead window.
pub(super) fn upcoming_birthdays(
    directory: &Directory,
    today: NaiveDate,
    horizon_days: u64,
) -> String {
    let upcoming = directory.upcoming_birthdays(today, horizon_days);
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
