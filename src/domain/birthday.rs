//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted input format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday.
///
/// Carries the source text (`DD.MM.YYYY`) for display alongside the
/// parsed date that backs computations. Construction fails unless the
/// text parses under exactly that format, which also rejects
/// non-calendar dates like `31.02.2000`.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.03.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not
    /// parse under the `DD.MM.YYYY` format.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let date = NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(text.clone()))?;
        Ok(Self { text, date })
    }

    /// Get the birthday exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date (including the birth year).
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday is observed in the given year.
    ///
    /// A 29.02 birthday is observed on 28.02 in non-leap years.
    pub fn observed_in(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()) {
            Some(date) => date,
            None => NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(self.date),
        }
    }

    /// The next observance on or after `today`: this year if it hasn't
    /// passed yet, otherwise next year.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.observed_in(today.year());
        if this_year < today {
            self.observed_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Days from `today` until the next observance. Zero on the day itself.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

// Serde support - serialize as the source text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
