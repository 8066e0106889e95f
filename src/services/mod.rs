//! Application service layer.
//!
//! Services contain the business operations and own the address book they
//! act on. They provide a clean boundary between the bot handlers and the
//! in-memory store.

mod clock;
mod contact_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use contact_service::{AddContactOutcome, ContactService, ContactServiceImpl, NO_CONTACTS};
