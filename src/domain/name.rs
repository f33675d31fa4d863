//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The identifying name of a contact.
///
/// Names are trimmed and must not be empty. A name is the unique key of a
/// record inside the address book and never changes once constructed.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("  Anna ").unwrap();
/// assert_eq!(name.as_str(), "Anna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Anna").unwrap();
        assert_eq!(name.as_str(), "Anna");
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::new("  Bob\t").unwrap();
        assert_eq!(name.into_inner(), "Bob");
    }

    #[test]
    fn test_name_empty_fails() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_deserialization_blank_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
