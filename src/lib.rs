//! Contact Book - an in-memory contact directory.
//!
//! Stores named records with validated phone numbers and an optional
//! birthday, and answers which contacts have a birthday in the next few
//! days.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The address book and the upcoming birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use contact_book::{AddressBook, Record};
//!
//! let mut bob = Record::new("Bob").unwrap();
//! bob.add_phone("0987654321").unwrap();
//! bob.set_birthday("20.05.1985").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(bob);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 5, 15).unwrap();
//! let upcoming = book.get_upcoming_birthdays(today, 7);
//! assert_eq!(upcoming[0].name().as_str(), "Bob");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use book::{AddressBook, LeapDayPolicy};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookResult, ConfigError, ConfigResult};
pub use models::Record;
