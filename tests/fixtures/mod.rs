//! Shared test fixtures for the integration tests.

#![allow(dead_code)]

use address_book_bot::repositories::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use address_book_bot::services::{ContactServiceImpl, FixedClock};
use address_book_bot::{AddressBook, Record};
use chrono::NaiveDate;
use std::sync::Arc;

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Monday, 10 June 2024.
pub fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

/// A record with an optional `DD.MM.YYYY` birthday and the given phones.
pub fn sample_record(name: &str, birthday: Option<&str>, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A book holding `(name, birthday)` pairs in the given order.
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, Some(birthday), &[]))
            .expect("unique fixture names");
    }
    book
}

/// A service over an empty book whose clock is stuck on `today`.
pub fn service_on(today: NaiveDate) -> ContactServiceImpl {
    ContactServiceImpl::new(Arc::new(FixedClock(today)), DEFAULT_BIRTHDAY_WINDOW_DAYS)
}
