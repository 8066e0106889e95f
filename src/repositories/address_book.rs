//! In-memory address book.

use crate::error::{BookError, BookResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;
use std::fmt;

/// Default lookahead of the upcoming-birthday query, in days (inclusive).
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Name-keyed store of records.
///
/// Iteration follows insertion order. Each book is an independent value;
/// nothing is shared between instances.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if the name is taken; the book is
    /// left unchanged.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().as_str().to_string();
        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateName(key));
        }
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name and hand it back.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays in the next 7 days, counting `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Birthdays whose occurrence this year is `0..=window_days` days from
    /// `today`.
    ///
    /// The window test uses the real occurrence; the reported date moves a
    /// Saturday or Sunday occurrence to the following Monday. Occurrences
    /// that already passed this year are not rolled over into next year.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = birthday.occurrence_in(today.year());
                let delta = (occurrence - today).num_days();
                if !(0..=window_days).contains(&delta) {
                    return None;
                }
                Some(UpcomingBirthday::new(
                    record.name().clone(),
                    congratulation_date(occurrence),
                ))
            })
            .collect()
    }
}

/// Move weekend dates to the following Monday.
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        if let Some(birthday) = birthday {
            record.set_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None)).unwrap();

        assert_eq!(book.len(), 1);
        assert!(book.find("John").is_some());
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_duplicate_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", Some("01.01.1990"))).unwrap();

        let err = book.add_record(record("John", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().birthday().is_some());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None)).unwrap();

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().as_str(), "John");
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
    }

    #[test]
    fn test_delete_missing() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None)).unwrap();

        let err = book.delete("Jane").unwrap_err();
        assert_eq!(err, BookError::ContactNotFound("Jane".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Zed", "Amy", "Mo", "Bob"] {
            book.add_record(record(name, None)).unwrap();
        }
        book.delete("Mo").unwrap();
        book.add_record(record("Mo", None)).unwrap();

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Bob", "Mo"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None)).unwrap();

        book.find_mut("John")
            .unwrap()
            .add_phone("1111111111")
            .unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_display_one_record_per_line() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None)).unwrap();
        book.add_record(record("Jane", Some("02.03.1991"))).unwrap();

        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: , birthday: ---\n\
             Contact name: Jane, phones: , birthday: 02.03.1991"
        );
    }

    #[test]
    fn test_congratulation_date_weekends() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 14)), date(2024, 6, 14));
    }

    #[test]
    fn test_upcoming_window_bounds() {
        let mut book = AddressBook::new();
        // today 2024-06-10 (Monday)
        book.add_record(record("Today", Some("10.06.1980"))).unwrap();
        book.add_record(record("Seven", Some("17.06.1980"))).unwrap();
        book.add_record(record("Eight", Some("18.06.1980"))).unwrap();
        book.add_record(record("Yesterday", Some("09.06.1980"))).unwrap();
        book.add_record(record("NoBirthday", None)).unwrap();

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10));
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "Seven"]);
    }

    #[test]
    fn test_upcoming_custom_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Soon", Some("12.06.1980"))).unwrap();
        book.add_record(record("Later", Some("30.06.1980"))).unwrap();

        assert_eq!(book.upcoming_birthdays_within(date(2024, 6, 10), 0).len(), 0);
        assert_eq!(book.upcoming_birthdays_within(date(2024, 6, 10), 2).len(), 1);
        assert_eq!(book.upcoming_birthdays_within(date(2024, 6, 10), 20).len(), 2);
    }
}
