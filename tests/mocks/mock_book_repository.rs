use address_book::error::StorageResult;
use address_book::models::AddressBook;
use address_book::repositories::BookRepository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock address book repository for testing.
///
/// Keeps the last saved book in memory and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    saved: Mutex<Option<AddressBook>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(book);
        repo
    }

    /// The most recently saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
