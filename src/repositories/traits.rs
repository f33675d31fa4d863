use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the whole address book.
    ///
    /// Returns an empty book when no state has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole address book, replacing any previous state.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
