//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by mutating a record or the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already carries a birthday
    #[error("Birthday already exists for {name}")]
    DuplicateBirthday { name: String },
}

/// Errors surfaced to the user while parsing or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Please enter a command.")]
    EmptyInput,

    /// Command word not recognised
    #[error("Invalid command: {0}")]
    Unknown(String),

    /// Too few arguments for the command
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// No record under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record exists but does not carry this phone
    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The underlying record operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but cannot be decoded
    #[error("Corrupt address book file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
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

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
