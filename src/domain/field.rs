//! Shared behaviour of contact field values.

use std::fmt::Display;

/// A named, immutable value stored on a contact record.
///
/// The `Display` impl is the human-readable form used when a record is
/// rendered. Edits never mutate a field in place; a new value replaces the
/// old one.
pub trait Field: Display {
    /// Native representation of the stored value.
    type Value: ?Sized;

    /// Borrow the stored value.
    fn value(&self) -> &Self::Value;
}
