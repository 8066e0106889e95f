//! Address Book Bot - a console assistant that keeps contacts, phone numbers
//! and birthdays, and reminds you of the birthdays coming up this week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and the upcoming-birthday entry
//! - **repositories**: The in-memory address book and its birthday-window query
//! - **services**: The operations the bot performs on the book
//! - **bot**: Command parsing, handlers and the stdin/stdout session loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ErrorKind};
pub use models::{Record, UpcomingBirthday};
pub use repositories::AddressBook;
pub use services::{AddContactOutcome, ContactService, ContactServiceImpl};
