//! Test fixtures and sample data.
//!
//! Reusable builders for records and books shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("fixture name must be valid");
    for phone in phones {
        record.add_phone(*phone).expect("fixture phone must be valid");
    }
    if let Some(raw) = birthday {
        record.set_birthday(raw).expect("fixture birthday must be valid");
    }
    record
}

/// Build a record whose birthday is `offset_days` after `reference`, born in
/// 1992 so that a 29 February result is still a real date.
pub fn record_with_birthday_in(name: &str, reference: NaiveDate, offset_days: u64) -> Record {
    let date = reference + chrono::Days::new(offset_days);
    let raw = format!("{}.1992", date.format("%d.%m"));
    sample_record(name, &["1234567890"], Some(&raw))
}

/// The book built by the walkthrough: John and Jane.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"], None));
    book.add_record(sample_record("Jane", &["9876543210"], None));
    book
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date must exist")
}
