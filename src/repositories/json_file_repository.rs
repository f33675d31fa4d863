use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Address book repository backed by a pretty-printed JSON file.
///
/// Saves go through a sibling `.tmp` file that is renamed over the target,
/// so an interrupted save never leaves a half-written book behind.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "No saved address book, starting empty"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.path.display().to_string(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        // Serializing an AddressBook cannot fail: every key is a string
        let json = serde_json::to_string_pretty(book).map_err(|source| StorageError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
