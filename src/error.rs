//! Error types for the address book bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// The coarse category of a [`BookError`], for callers that only care
/// about what went wrong and not which value caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, date or name
    Validation,
    /// Unknown contact name or phone
    NotFound,
    /// Name collision on insert
    DuplicateName,
    /// Birthday already present
    AlreadySet,
}

/// Errors returned by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Input failed value object validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact with this name
    #[error("The name {0} wasn't found in your contacts")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number {0} wasn't found")]
    PhoneNotFound(String),

    /// A contact with this name already exists
    #[error("Contact {0} already exists")]
    DuplicateName(String),

    /// The contact's birthday has been set before
    #[error("The birthday of {0} is already given")]
    BirthdayAlreadySet(String),
}

impl BookError {
    /// The tagged kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::Validation(_) => ErrorKind::Validation,
            BookError::ContactNotFound(_) | BookError::PhoneNotFound(_) => ErrorKind::NotFound,
            BookError::DuplicateName(_) => ErrorKind::DuplicateName,
            BookError::BirthdayAlreadySet(_) => ErrorKind::AlreadySet,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
