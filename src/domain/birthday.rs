//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and parse format for birthdays and congratulation dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth.
///
/// Constructed from a `DD.MM.YYYY` string: two-digit day, two-digit month,
/// four-digit year, naming a real calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("12.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// assert!(Birthday::parse("1990-06-12").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the shape is wrong or the
    /// date does not exist (for example `31.02.2000`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !Self::has_shape(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// `chrono` accepts unpadded fields, so the layout is checked up front.
    fn has_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day applied to `year`.
    ///
    /// 29 February falls back to 28 February when `year` is not a leap year.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
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
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 12).unwrap()
        );
        assert_eq!(birthday.to_string(), "12.06.1990");
    }

    #[test]
    fn test_birthday_validates_shape() {
        for bad in [
            "",
            "1.6.1990",
            "12.6.1990",
            "12.06.90",
            "1990-06-12",
            "12/06/1990",
            "12.06.1990 ",
            "ab.cd.efgh",
            "12.06.+990",
        ] {
            assert_eq!(
                Birthday::parse(bad),
                Err(ValidationError::InvalidBirthday(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_birthday_validates_calendar() {
        assert!(Birthday::parse("31.02.2000").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("15.13.2000").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 6, 12)
        );
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.in_year(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.in_year(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serde_round_trips_year_extremes() {
        for raw in ["01.01.0000", "31.12.9999"] {
            let birthday = Birthday::parse(raw).unwrap();
            let json = serde_json::to_string(&birthday).unwrap();
            assert_eq!(json, format!("\"{}\"", raw));

            let restored: Birthday = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, birthday);
        }
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::parse("01.01.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.01.1990\"");

        let result: Result<Birthday, _> = serde_json::from_str("\"1990-01-01\"");
        assert!(result.is_err());
    }
}
