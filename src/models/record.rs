//! Contact record: one person's entry in the directory.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::DirectoryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text used when a record has no birthday.
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is fixed at creation (it is the directory key). Phones keep
/// insertion order and may contain duplicates; `edit_phone` only ever
/// touches the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone exactly equal to `phone`. Removing a number
    /// that isn't there is a no-op, not an error.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`. Later
    /// duplicates of `old` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: PhoneNumber) -> Result<(), DirectoryError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(DirectoryError::PhoneNotFound),
        }
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// The birthday text as entered, or a "not set" message.
    pub fn birthday_display(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.as_str().to_string(),
            None => BIRTHDAY_NOT_SET.to_string(),
        }
    }

    /// Days from `today` until the next observance of the birthday, or
    /// `None` when no birthday is set.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until_next(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones,
            self.birthday_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    fn phone(value: &str) -> PhoneNumber {
        PhoneNumber::new(value).unwrap()
    }

    #[test]
    fn test_record_new() {
        let rec = record("Alice");
        assert_eq!(rec.name().as_str(), "Alice");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        rec.add_phone(phone("0987654321"));
        rec.add_phone(phone("1234567890"));
        let phones: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1234567890", "0987654321", "1234567890"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        rec.add_phone(phone("0987654321"));
        rec.add_phone(phone("1234567890"));
        rec.remove_phone("1234567890");
        let phones: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["0987654321"]);
    }

    #[test]
    fn test_remove_absent_phone_is_noop() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        rec.remove_phone("0000000000");
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        rec.add_phone(phone("1234567890"));
        rec.edit_phone("1234567890", phone("1111111111")).unwrap();
        let phones: Vec<_> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "1234567890"]);
    }

    #[test]
    fn test_edit_phone_absent_fails() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        let err = rec.edit_phone("0000000000", phone("1111111111"));
        assert_eq!(err, Err(DirectoryError::PhoneNotFound));
    }

    #[test]
    fn test_birthday_display() {
        let mut rec = record("Alice");
        assert_eq!(rec.birthday_display(), BIRTHDAY_NOT_SET);
        rec.set_birthday(Birthday::new("15.03.1990").unwrap());
        assert_eq!(rec.birthday_display(), "15.03.1990");
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut rec = record("Alice");
        rec.set_birthday(Birthday::new("15.03.1990").unwrap());
        rec.set_birthday(Birthday::new("16.03.1990").unwrap());
        assert_eq!(rec.birthday_display(), "16.03.1990");
    }

    #[test]
    fn test_days_to_next_birthday() {
        let mut rec = record("Alice");
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        assert_eq!(rec.days_to_next_birthday(today), None);
        rec.set_birthday(Birthday::new("15.03.1990").unwrap());
        assert_eq!(rec.days_to_next_birthday(today), Some(3));
    }

    #[test]
    fn test_display_rendering() {
        let mut rec = record("John");
        rec.add_phone(phone("1234567890"));
        rec.add_phone(phone("5555555555"));
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: Birthday not set."
        );

        rec.set_birthday(Birthday::new("01.12.1985").unwrap());
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 01.12.1985"
        );
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut rec = record("Alice");
        rec.add_phone(phone("1234567890"));
        rec.set_birthday(Birthday::new("15.03.1990").unwrap());

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }

    #[test]
    fn test_record_deserializes_without_optional_fields() {
        let rec: Record = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(rec.name().as_str(), "Bob");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }
}
