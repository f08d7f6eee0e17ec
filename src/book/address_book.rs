//! In-memory address book keyed by contact name.

use super::upcoming::{self, LeapDayPolicy, DEFAULT_WINDOW_DAYS};
use crate::config::Config;
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::fmt;

/// A collection of [`Record`]s keyed by name, iterated in insertion order.
///
/// The book owns its records; deleting an entry drops the record. There is
/// no internal locking, so callers sharing a book across threads must wrap
/// the whole thing in a single lock.
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    leap_day_policy: LeapDayPolicy,
    window_days: u32,
}

impl AddressBook {
    /// Create an empty book with the default leap day policy and window.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            leap_day_policy: LeapDayPolicy::default(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Create an empty book using the birthday settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            leap_day_policy: config.leap_day_policy,
            window_days: config.upcoming_window_days,
        }
    }

    /// Use `policy` when re-anchoring 29 February birthdays.
    pub fn with_leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }

    pub fn leap_day_policy(&self) -> LeapDayPolicy {
        self.leap_day_policy
    }

    /// Insert `record` under its name.
    ///
    /// A record already stored under the same name is replaced in place,
    /// keeping its position in iteration order, and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::warn!(name = %record.name(), "Replacing existing record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!(name = %record.name(), "Record added");
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`. Returns whether one was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.records.remove(index);
                tracing::debug!(name = %name, "Record deleted");
                true
            }
            None => false,
        }
    }

    /// Records whose birthday falls within `window_days` days of `reference`.
    ///
    /// See [`upcoming::upcoming_birthdays`] for the exact rules. Results keep
    /// the book's insertion order.
    pub fn get_upcoming_birthdays(&self, reference: NaiveDate, window_days: u32) -> Vec<&Record> {
        let found = upcoming::upcoming_birthdays(
            &self.records,
            reference,
            window_days,
            self.leap_day_policy,
        );

        tracing::debug!(
            reference = %reference,
            window_days = window_days,
            result_count = found.len(),
            "Upcoming birthdays computed"
        );

        found
    }

    /// Upcoming birthdays from the local calendar date, over the book's
    /// configured window.
    pub fn upcoming_birthdays_from_today(&self) -> Vec<&Record> {
        self.get_upcoming_birthdays(Local::now().date_naive(), self.window_days)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Names of all records in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
