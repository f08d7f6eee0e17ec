//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format accepted and produced by [`Birthday`].
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the exact shape is checked first.
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date parsed from a `DD.MM.YYYY` string.
///
/// Rendering uses the same zero-padded pattern, so any string accepted by
/// [`Birthday::new`] is reproduced exactly by `to_string()`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.05.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.05.1990");
/// assert!(Birthday::new("31.02.2000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a `DD.MM.YYYY` birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the string does not
    /// match the pattern or does not name a real calendar date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw).map(Self)
    }

    /// Parse `raw` strictly as `DD.MM.YYYY` into a date.
    pub fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_RE.is_match(raw) {
            return Err(ValidationError::InvalidDateFormat(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Whether this is a 29 February birthday.
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
