//! Data models for the contact book.
//!
//! This module contains the aggregate stored in the address book: a
//! [`Record`] holding a contact's name, phones and birthday.

pub mod record;

pub use record::Record;
