//! Data models for the address book.
//!
//! A [`Record`] holds one contact's mutable state; an [`UpcomingBirthday`]
//! is a derived entry produced by the birthday-window query.

pub mod record;
pub mod upcoming_birthday;

pub use record::Record;
pub use upcoming_birthday::UpcomingBirthday;
