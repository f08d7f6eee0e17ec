//! Contact record: a name with its phones and an optional birthday.

use crate::domain::{Birthday, Name, Phone};
use crate::error::BookResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the address book.
///
/// The name is fixed at creation. Phones form an ordered list that may
/// contain duplicates; every entry passed validation. At most one birthday
/// is held at a time and setting a new one overwrites the old.
///
/// The `Display` impl renders
/// `Contact name: {name}, phones: {p1}; {p2}[, birthday: DD.MM.YYYY]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> BookResult<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone equal to `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(false)` and leaves the record untouched when `old` is not
    /// present. `new` is validated before anything is replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `old` exists and `new`
    /// is not a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<bool> {
        let Some(index) = self.position_of(old) else {
            return Ok(false);
        };

        self.phones[index] = Phone::new(new)?;
        Ok(true)
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Parse and store a `DD.MM.YYYY` birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Same as [`Record::set_birthday`].
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.set_birthday(raw)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;

        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }

        Ok(())
    }
}
