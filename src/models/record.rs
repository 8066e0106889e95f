//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// Placeholder rendered when a record has no birthday.
const NO_BIRTHDAY: &str = "---";

/// A contact: an immutable name, distinct phone numbers in insertion order,
/// and an optional birthday that can only be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Returns `Ok(false)` without touching the list if the number is
    /// already present.
    pub fn add_phone(&mut self, value: &str) -> BookResult<bool> {
        let phone = PhoneNumber::new(value)?;
        Ok(self.push_phone(phone))
    }

    /// Append an already validated phone number unless present.
    pub fn push_phone(&mut self, phone: PhoneNumber) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Look up a phone number by its string value.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == value)
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record doesn't have it.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<PhoneNumber> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is validated before anything changes, so a failed edit leaves
    /// the phone list exactly as it was. On success `new` is appended (unless
    /// already present) and `old` removed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new_phone = PhoneNumber::new(new)?;
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        if new_phone == *old {
            return Ok(());
        }
        self.push_phone(new_phone);
        self.remove_phone(old)?;
        Ok(())
    }

    /// Set the birthday from a `DD.MM.YYYY` string.
    ///
    /// The first value wins: once set, the birthday is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `BookError::BirthdayAlreadySet` if a birthday exists, or a
    /// validation error for a malformed date.
    pub fn set_birthday(&mut self, value: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Phones joined with `;` in insertion order.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_joined()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}
