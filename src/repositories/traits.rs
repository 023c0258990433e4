use crate::error::StoreResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for persisting the address book.
///
/// The book is loaded and saved as a single unit, enabling different
/// implementations (JSON file, in-memory mock).
#[async_trait]
pub trait AddressBookRepository: Send + Sync {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    async fn load(&self) -> StoreResult<AddressBook>;

    /// Replace the stored book with `book`.
    async fn save(&self, book: &AddressBook) -> StoreResult<()>;
}
