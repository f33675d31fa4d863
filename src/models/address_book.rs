//! The address book: every record keyed by contact name.

use super::record::Record;
use crate::domain::birthday::DATE_FORMAT;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How many days ahead of today a birthday still counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// This year's occurrence of the birthday
    #[serde(rename = "congratulation_date", serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date formatted as `DD.MM.YYYY`.
    pub fn congratulation_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// On-disk shape of the address book.
#[derive(Serialize, Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    records: Vec<Record>,
}

/// The collection of all contacts, at most one record per name.
///
/// Records are kept sorted by name. Only the operations below are exposed;
/// callers never touch the underlying map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSnapshot", into = "BookSnapshot")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Remove the record for `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays in the coming week, relative to the local current date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays in the coming week, relative to `today`.
    ///
    /// A birthday qualifies when this year's occurrence is between `today` and
    /// `today + 7` days inclusive and falls on a weekday. Birthdays already
    /// past this year are not rolled over into next year, and weekend
    /// occurrences are dropped rather than moved to Monday.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.show_birthday()?;
                let this_year = birthday.in_year(today.year())?;
                if this_year < today {
                    return None;
                }

                let diff_in_days = (this_year - today).num_days();
                if diff_in_days > UPCOMING_WINDOW_DAYS || is_weekend(this_year) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: this_year,
                })
            })
            .collect()
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl From<BookSnapshot> for AddressBook {
    fn from(snapshot: BookSnapshot) -> Self {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookSnapshot {
    fn from(book: AddressBook) -> Self {
        Self {
            records: book.records.into_values().collect(),
        }
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let birthday = record
                .show_birthday()
                .map(ToString::to_string)
                .unwrap_or_else(|| "No birthday".to_string());
            write!(
                f,
                "Name: {}, Phone: {}, Birthday: {}",
                record.name(),
                record.phones_joined(),
                birthday
            )?;
        }
        Ok(())
    }
}
