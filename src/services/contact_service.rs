//! Contact service layer.
//!
//! The fixed set of operations the bot performs on the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::{Record, UpcomingBirthday};
use crate::repositories::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::services::clock::{Clock, SystemClock};
use std::sync::Arc;
use tracing::debug;

/// Text returned by `list_all` for an empty book.
pub const NO_CONTACTS: &str = "No contacts found.";

/// What `add_contact` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddContactOutcome {
    /// A new contact was created with the phone
    Added,
    /// The phone was appended to an existing contact
    Updated,
    /// The existing contact already had this phone
    PhoneAlreadyExists,
}

/// Contact service trait for address book operations.
pub trait ContactService {
    /// Add a phone to a contact, creating the contact if needed.
    ///
    /// The phone is validated first, so an invalid phone never creates an
    /// empty contact.
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddContactOutcome>;

    /// Replace one of a contact's phones.
    fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()>;

    /// A contact's phones in insertion order.
    fn list_phones(&self, name: &str) -> BookResult<Vec<PhoneNumber>>;

    /// The whole book, one contact per line, or [`NO_CONTACTS`].
    fn list_all(&self) -> String;

    /// Set a contact's birthday (first write wins).
    fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<()>;

    /// A contact's birthday, `None` if not set.
    fn get_birthday(&self, name: &str) -> BookResult<Option<Birthday>>;

    /// Birthdays inside the configured window, counted from today.
    fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday>;

    /// Remove a contact.
    fn delete_contact(&mut self, name: &str) -> BookResult<()>;

    /// Remove one phone from a contact.
    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()>;

    /// The book as a JSON array of records.
    fn export_json(&self) -> serde_json::Result<String>;
}

/// Default implementation of ContactService, owning its address book.
pub struct ContactServiceImpl {
    book: AddressBook,
    clock: Arc<dyn Clock>,
    birthday_window_days: i64,
}

impl ContactServiceImpl {
    /// Create a service over an empty book.
    pub fn new(clock: Arc<dyn Clock>, birthday_window_days: i64) -> Self {
        Self::with_book(AddressBook::new(), clock, birthday_window_days)
    }

    /// Create a service over an existing book.
    pub fn with_book(book: AddressBook, clock: Arc<dyn Clock>, birthday_window_days: i64) -> Self {
        Self {
            book,
            clock,
            birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        let name = name.trim();
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        let name = name.trim();
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

impl Default for ContactServiceImpl {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddContactOutcome> {
        let phone = PhoneNumber::new(phone)?;

        let outcome = match self.book.find_mut(name.trim()) {
            Some(record) => {
                if record.push_phone(phone) {
                    AddContactOutcome::Updated
                } else {
                    AddContactOutcome::PhoneAlreadyExists
                }
            }
            None => {
                let mut record = Record::new(name)?;
                record.push_phone(phone);
                self.book.add_record(record)?;
                AddContactOutcome::Added
            }
        };

        debug!(name = name.trim(), ?outcome, "add_contact");
        Ok(outcome)
    }

    fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        debug!(name = name.trim(), old, new, "phone edited");
        Ok(())
    }

    fn list_phones(&self, name: &str) -> BookResult<Vec<PhoneNumber>> {
        Ok(self.record(name)?.phones().to_vec())
    }

    fn list_all(&self) -> String {
        if self.book.is_empty() {
            return NO_CONTACTS.to_string();
        }
        self.book.to_string()
    }

    fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<()> {
        self.record_mut(name)?.set_birthday(date)?;
        debug!(name = name.trim(), date, "birthday set");
        Ok(())
    }

    fn get_birthday(&self, name: &str) -> BookResult<Option<Birthday>> {
        Ok(self.record(name)?.birthday().copied())
    }

    fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        let today = self.clock.today();
        let upcoming = self
            .book
            .upcoming_birthdays_within(today, self.birthday_window_days);
        debug!(%today, count = upcoming.len(), "upcoming birthdays");
        upcoming
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<()> {
        self.book.delete(name.trim())?;
        debug!(name = name.trim(), "contact deleted");
        Ok(())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.remove_phone(phone)?;
        debug!(name = name.trim(), phone, "phone removed");
        Ok(())
    }

    fn export_json(&self) -> serde_json::Result<String> {
        let records: Vec<&Record> = self.book.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}
