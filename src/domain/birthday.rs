//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's %Y takes any digit count and a sign, so the shape is checked first
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$")
        .expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` and stored as a calendar date, so impossible
/// dates such as `31.02.2000` are rejected up front.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a real
    /// date in that format.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Wrap an already known date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's occurrence in `year`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("01.02.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("1990-02-01").is_err());
        assert!(Birthday::parse("01/02/1990").is_err());
        assert!(Birthday::parse("01.02.1990x").is_err());
        assert!(Birthday::parse("tomorrow").is_err());
    }

    #[test]
    fn test_birthday_requires_four_digit_unsigned_year() {
        for value in [
            "01.01.99",
            "01.01.0",
            "01.01.+2000",
            "01.01.-100",
            "01.01.19900",
            " 01.01.1990",
            "01.01.1990 ",
        ] {
            assert_eq!(
                Birthday::parse(value),
                Err(ValidationError::InvalidBirthday(value.to_string())),
                "{:?} should be rejected",
                value
            );
        }
        assert!(Birthday::parse("1.1.1990").is_ok());
        assert!(Birthday::parse("01.01.0099").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::parse("31.02.2000").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("12.13.2000").is_err());
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_display_is_zero_padded() {
        let birthday = Birthday::from_date(NaiveDate::from_ymd_opt(2001, 3, 7).unwrap());
        assert_eq!(birthday.to_string(), "07.03.2001");
    }

    #[test]
    fn test_occurrence_in_keeps_month_and_day() {
        let birthday = Birthday::parse("15.06.1985").unwrap();
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_leap_day_occurrence_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"15.06.1990\"");

        let back: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
        assert_eq!(back, birthday);
        assert!(serde_json::from_str::<Birthday>("\"1990-06-15\"").is_err());
    }
}
