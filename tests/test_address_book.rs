//! Integration tests for the address book: insert, lookup, delete and the
//! upcoming birthday report.

mod fixtures;

use chrono::Datelike;
use contact_book::{AddressBook, Config, LeapDayPolicy};
use fixtures::*;

fn names<'a>(records: impl IntoIterator<Item = &'a contact_book::Record>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.name().as_str()).collect()
}

#[test]
fn test_delete_then_find() {
    let mut book = sample_book();

    assert!(book.delete("Jane"));
    assert!(book.find("Jane").is_none());
    assert!(book.find("John").is_some());
}

#[test]
fn test_delete_absent_leaves_book_unchanged() {
    let mut book = sample_book();
    let before = book.to_string();

    assert!(!book.delete("Nobody"));
    assert_eq!(book.len(), 2);
    assert_eq!(book.to_string(), before);
}

#[test]
fn test_edit_through_book() -> anyhow::Result<()> {
    let mut book = sample_book();

    let john = book.find_mut("John").expect("John is in the sample book");
    assert!(john.edit_phone("1234567890", "1112223333")?);

    assert_eq!(
        book.find("John").map(|r| r.to_string()).as_deref(),
        Some("Contact name: John, phones: 1112223333; 5555555555")
    );
    Ok(())
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut book = AddressBook::new();
    for name in ["Charlie", "Alice", "Bob"] {
        book.add_record(sample_record(name, &[], None));
    }

    assert_eq!(names(&book), vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_duplicate_name_overwrites() {
    let mut book = sample_book();

    let replaced = book.add_record(sample_record("Jane", &["1111111111"], None));
    assert_eq!(
        replaced.map(|r| r.to_string()).as_deref(),
        Some("Contact name: Jane, phones: 9876543210")
    );
    assert_eq!(book.len(), 2);
    assert_eq!(
        book.find("Jane").unwrap().phones()[0].as_str(),
        "1111111111"
    );
}

#[test]
fn test_birthday_five_days_out_is_upcoming() {
    let reference = date(2026, 5, 15);
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday_in("Bob", reference, 5));
    book.add_record(record_with_birthday_in("Carol", reference, 10));
    book.add_record(sample_record("Dave", &["1234567890"], None));

    assert_eq!(names(book.get_upcoming_birthdays(reference, 7)), vec!["Bob"]);
}

#[test]
fn test_window_edges() {
    let reference = date(2026, 10, 18);
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday_in("Today", reference, 0));
    book.add_record(record_with_birthday_in("Seventh", reference, 7));
    book.add_record(record_with_birthday_in("Eighth", reference, 8));
    book.add_record(sample_record("Yesterday", &[], Some("17.10.1970")));

    assert_eq!(
        names(book.get_upcoming_birthdays(reference, 7)),
        vec!["Today", "Seventh"]
    );
    assert_eq!(
        names(book.get_upcoming_birthdays(reference, 8)),
        vec!["Today", "Seventh", "Eighth"]
    );
}

#[test]
fn test_walkthrough_birthdays() {
    let mut book = sample_book();
    book.delete("Jane");
    book.add_record(sample_record("Alice", &["1234567890"], Some("15.05.1990")));
    book.add_record(sample_record("Bob", &["0987654321"], Some("20.05.1985")));

    assert_eq!(
        names(book.get_upcoming_birthdays(date(2026, 5, 14), 7)),
        vec!["Alice", "Bob"]
    );
    assert_eq!(
        names(book.get_upcoming_birthdays(date(2026, 5, 16), 7)),
        vec!["Bob"]
    );
    assert!(book.get_upcoming_birthdays(date(2026, 6, 1), 7).is_empty());
}

#[test]
fn test_leap_day_birthday_follows_config() {
    let config = Config {
        leap_day_policy: LeapDayPolicy::FebruaryLast,
        ..Config::default()
    };
    let mut book = AddressBook::from_config(&config);
    book.add_record(sample_record("Leap", &[], Some("29.02.1996")));

    assert_eq!(
        names(book.get_upcoming_birthdays(date(2027, 2, 28), 0)),
        vec!["Leap"]
    );
    assert!(book.get_upcoming_birthdays(date(2027, 3, 1), 0).is_empty());
}

#[test]
fn test_upcoming_from_today_uses_local_clock() {
    let today = chrono::Local::now().date_naive();
    if (today + chrono::Days::new(3)).year() != today.year() {
        // Re-anchoring never reaches into next year.
        return;
    }

    let mut book = AddressBook::new();
    book.add_record(record_with_birthday_in("Soon", today, 3));
    assert_eq!(names(book.upcoming_birthdays_from_today()), vec!["Soon"]);
}
