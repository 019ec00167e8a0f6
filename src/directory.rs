//! The contact directory: every record, keyed by name.

use crate::error::DirectoryError;
use crate::models::Record;
use chrono::NaiveDate;

/// The full collection of contact records.
///
/// Names are unique; insertion order is preserved and is the iteration
/// order for listing and for the upcoming-birthdays query. The directory
/// exclusively owns its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert or overwrite by name, last write wins. A fresh insert goes
    /// to the end of the iteration order; an overwrite keeps the
    /// record's original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-name lookup. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Exact-name lookup for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ContactNotFound` if no record exists.
    pub fn delete(&mut self, name: &str) -> Result<(), DirectoryError> {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                Ok(())
            }
            None => Err(DirectoryError::ContactNotFound),
        }
    }

    /// Records whose next birthday observance falls within
    /// `[reference, reference + horizon_days]`, in directory order.
    ///
    /// The observance date wraps into the following year when the
    /// birthday has already passed this year, so a late-December
    /// birthday is visible from an early-January reference date.
    pub fn upcoming_birthdays(&self, reference: NaiveDate, horizon_days: u64) -> Vec<&Record> {
        let end = reference + chrono::Duration::days(horizon_days as i64);
        self.records
            .iter()
            .filter(|record| {
                record
                    .birthday()
                    .map(|b| b.next_occurrence(reference) <= end)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl FromIterator<Record> for Directory {
    /// Collect records, collapsing duplicate names via the upsert rule.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
