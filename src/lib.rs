//! Address Book - a command-line assistant for contacts, phone numbers, and birthdays.
//!
//! Contacts live in an in-memory [`AddressBook`] keyed by name. Every field is
//! a validated value object, so malformed phones and dates are rejected at the
//! boundary. The book answers which contacts have a weekday birthday within
//! the next seven days.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record and the address book collection
//! - **commands**: Parsing and execution of user commands
//! - **shell**: The interactive read-eval-print loop
//! - **repositories**: Loading and saving the address book
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use commands::{execute, parse_input, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use shell::{Clock, FixedClock, Shell, SystemClock};
