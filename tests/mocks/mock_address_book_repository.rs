use async_trait::async_trait;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::AddressBook;
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the last saved book in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a new empty MockAddressBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// The most recently saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
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

#[async_trait]
impl AddressBookRepository for MockAddressBookRepository {
    async fn load(&self) -> StoreResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "save refused by mock",
            )));
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
