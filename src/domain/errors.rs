//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing a validated contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number format: {}. Please provide a 10-digit numeric phone number.",
                phone
            ),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format: {}. Use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
