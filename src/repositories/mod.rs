//! In-memory storage of contact records.

mod address_book;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
