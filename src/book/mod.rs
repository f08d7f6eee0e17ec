//! The address book and its birthday query.

mod address_book;
pub mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{LeapDayPolicy, DEFAULT_WINDOW_DAYS};
