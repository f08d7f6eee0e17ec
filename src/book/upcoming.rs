//! Upcoming birthday query.
//!
//! A birthday is treated as recurring every year: its month and day are
//! re-anchored onto the reference date's year and the record is selected
//! when that date lies in `[reference, reference + window_days]`, both ends
//! inclusive. Only the reference year is considered, so a window that runs
//! past 31 December does not pick up January birthdays.

use crate::domain::Birthday;
use crate::error::ConfigError;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Default width of the upcoming birthday window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How a 29 February birthday is re-anchored onto a non-leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on 1 March.
    #[default]
    MarchFirst,

    /// Celebrate on 28 February.
    FebruaryLast,

    /// No birthday that year; the record is never selected.
    Skip,
}

impl LeapDayPolicy {
    /// Re-anchor `birthday` onto `year`.
    ///
    /// Returns `None` only for a leap-day birthday in a non-leap year under
    /// [`LeapDayPolicy::Skip`].
    pub fn anchor(self, birthday: &Birthday, year: i32) -> Option<NaiveDate> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
            return Some(date);
        }

        // Only 29 February can fail to exist in another year.
        match self {
            Self::MarchFirst => NaiveDate::from_ymd_opt(year, 3, 1),
            Self::FebruaryLast => NaiveDate::from_ymd_opt(year, 2, 28),
            Self::Skip => None,
        }
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MarchFirst => "march1",
            Self::FebruaryLast => "feb28",
            Self::Skip => "skip",
        };
        f.write_str(s)
    }
}

impl FromStr for LeapDayPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "march1" => Ok(Self::MarchFirst),
            "feb28" => Ok(Self::FebruaryLast),
            "skip" => Ok(Self::Skip),
            other => Err(ConfigError::Other(format!(
                "Unknown leap day policy '{}', expected march1, feb28 or skip",
                other
            ))),
        }
    }
}

/// Select the records whose next birthday in `reference`'s year falls within
/// `window_days` days of `reference`. Input order is preserved.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    reference: NaiveDate,
    window_days: u32,
    policy: LeapDayPolicy,
) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = reference
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    records
        .into_iter()
        .filter(|record| {
            let Some(birthday) = record.birthday() else {
                return false;
            };

            let anchored = policy.anchor(birthday, reference.year());
            tracing::trace!(
                name = %record.name(),
                birthday = %birthday,
                anchored = ?anchored,
                "Checking birthday"
            );

            anchored.is_some_and(|date| reference <= date && date <= window_end)
        })
        .collect()
}
