//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phones, and an optional birthday.
///
/// Every field is a validated value object, so a record can never hold a
/// malformed phone or birthday. Failed operations leave the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is blank.
    pub fn new(name: impl AsRef<str>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove every phone equal to `number`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone != number);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything changes. If `old` is not present the
    /// record is left as is.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new = Phone::new(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|phone| *phone == old) {
            *slot = new;
        }
        Ok(())
    }

    /// The first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == number)
    }

    /// Set the birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateBirthday` if one is already set; the stored
    /// value is kept.
    pub fn add_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::DuplicateBirthday {
                name: self.name.to_string(),
            });
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The stored birthday, if any.
    pub fn show_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Phones joined with `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("Anna").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("Anna").unwrap();
        assert_eq!(record.name().as_str(), "Anna");
        assert!(record.phones().is_empty());
        assert!(record.show_birthday().is_none());
    }

    #[test]
    fn test_new_record_rejects_blank_name() {
        assert_eq!(
            Record::new(" "),
            Err(BookError::Validation(ValidationError::EmptyName))
        );
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let record = record_with(&["0501234567", "0501234567"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = record_with(&["0501234567"]);
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record.phones_joined(), "0501234567");
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with(&["0501234567", "0670000000", "0501234567"]);
        record.remove_phone("0501234567");
        assert_eq!(record.phones_joined(), "0670000000");

        record.remove_phone("1111111111");
        assert_eq!(record.phones_joined(), "0670000000");
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = record_with(&["0501234567", "0670000000", "0501234567"]);
        record.edit_phone("0501234567", "0939999999").unwrap();
        assert_eq!(
            record.phones_joined(),
            "0939999999; 0670000000; 0501234567"
        );
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut record = record_with(&["0501234567"]);
        record.edit_phone("1111111111", "0939999999").unwrap();
        assert_eq!(record.phones_joined(), "0501234567");
    }

    #[test]
    fn test_edit_phone_validates_new_value() {
        let mut record = record_with(&["0501234567"]);
        assert!(record.edit_phone("0501234567", "bad").is_err());
        assert_eq!(record.phones_joined(), "0501234567");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["0501234567", "0670000000"]);
        assert_eq!(
            record.find_phone("0670000000").map(Phone::as_str),
            Some("0670000000")
        );
        assert!(record.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_add_birthday_twice_keeps_first() {
        let mut record = Record::new("Anna").unwrap();
        let first = Birthday::parse("12.06.1990").unwrap();
        record.add_birthday(first).unwrap();

        let err = record
            .add_birthday(Birthday::parse("01.01.2000").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            BookError::DuplicateBirthday {
                name: "Anna".to_string()
            }
        );
        assert_eq!(record.show_birthday(), Some(&first));
    }

    #[test]
    fn test_record_display() {
        let record = record_with(&["0501234567", "0670000000"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 0501234567; 0670000000"
        );
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"Anna","phones":["123"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"name":"Anna","phones":["0501234567"],"birthday":"12.06.1990"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.phones_joined(), "0501234567");
        assert_eq!(record.show_birthday().unwrap().to_string(), "12.06.1990");
    }
}
