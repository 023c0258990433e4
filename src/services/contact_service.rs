//! Contact service layer.
//!
//! Runs address book operations under one lock and persists the book after
//! every change.

use crate::domain::{Birthday, Phone, ValidationError};
use crate::error::{ContactError, ServiceResult};
use crate::models::{AddressBook, Record};
use crate::repositories::AddressBookRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// What `add` stored, for the caller to report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedContact {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create or replace a contact from free tokens.
    ///
    /// Ten-digit tokens become phones; any other token must be a birthday.
    async fn add(&self, name: &str, tokens: &[String]) -> ServiceResult<AddedContact>;

    /// Apply `(old, new)` phone pairs to a contact, all or nothing.
    ///
    /// Returns the contact's phones after the change.
    async fn change(&self, name: &str, pairs: &[String]) -> ServiceResult<Vec<String>>;

    /// Delete a contact. Returns whether it existed.
    async fn delete(&self, name: &str) -> ServiceResult<bool>;

    /// Render a single contact.
    async fn find(&self, name: &str) -> ServiceResult<String>;

    /// Render every contact, one per line.
    async fn render_all(&self) -> String;

    /// Render the remaining pages of the book's stored cursor.
    async fn paginate(&self, page_size: usize) -> ServiceResult<Vec<String>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    book: Arc<Mutex<AddressBook>>,
    repository: Arc<dyn AddressBookRepository>,
    fixed_today: Option<NaiveDate>,
}

impl ContactServiceImpl {
    /// Create a new contact service over an already loaded book.
    pub fn new(book: AddressBook, repository: Arc<dyn AddressBookRepository>) -> Self {
        Self {
            book: Arc::new(Mutex::new(book)),
            repository,
            fixed_today: None,
        }
    }

    /// Load the book from `repository` and wrap it in a service.
    pub async fn load(repository: Arc<dyn AddressBookRepository>) -> ServiceResult<Self> {
        let book = repository.load().await?;
        info!(records = book.len(), "Contact service ready");
        Ok(Self::new(book, repository))
    }

    /// Pin "today" for birthday countdowns instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Shared handle to the underlying book.
    pub fn book(&self) -> Arc<Mutex<AddressBook>> {
        Arc::clone(&self.book)
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn build_record(name: &str, tokens: &[String]) -> ServiceResult<Record> {
        let mut record = Record::new(name, None)?;

        for token in tokens {
            if Phone::is_valid(token) {
                record.add_phone(token)?;
            } else if token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::InvalidPhone(token.clone()).into());
            } else {
                record.set_birthday(Some(Birthday::new(token.as_str())?));
            }
        }

        Ok(record)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add(&self, name: &str, tokens: &[String]) -> ServiceResult<AddedContact> {
        if tokens.is_empty() {
            return Err(ContactError::insufficient("add", 2, 1).into());
        }

        let record = Self::build_record(name, tokens)?;
        let added = AddedContact {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        };

        let mut book = self.book.lock().await;
        let replaced = book.find(name).is_some();
        book.add_record(record);
        self.repository.save(&book).await?;

        debug!(name = %name, phones = added.phones.len(), replaced, "Contact added");
        Ok(added)
    }

    async fn change(&self, name: &str, pairs: &[String]) -> ServiceResult<Vec<String>> {
        if pairs.is_empty() || pairs.len() % 2 != 0 {
            return Err(ContactError::insufficient("change", 3, pairs.len() + 1).into());
        }

        let mut book = self.book.lock().await;
        let mut updated = book
            .find(name)
            .cloned()
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;

        for pair in pairs.chunks(2) {
            updated.edit_phone(&pair[0], &pair[1])?;
        }

        let phones: Vec<String> = updated.phones().iter().map(|p| p.to_string()).collect();
        if let Some(slot) = book.find_mut(name) {
            *slot = updated;
        }
        self.repository.save(&book).await?;

        debug!(name = %name, changed = pairs.len() / 2, "Phones changed");
        Ok(phones)
    }

    async fn delete(&self, name: &str) -> ServiceResult<bool> {
        let mut book = self.book.lock().await;
        let existed = book.delete(name).is_some();
        if existed {
            self.repository.save(&book).await?;
        }

        debug!(name = %name, existed, "Contact deleted");
        Ok(existed)
    }

    async fn find(&self, name: &str) -> ServiceResult<String> {
        let book = self.book.lock().await;
        let record = book
            .find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        Ok(record.render(self.today()))
    }

    async fn render_all(&self) -> String {
        let book = self.book.lock().await;
        book.render(self.today())
    }

    async fn paginate(&self, page_size: usize) -> ServiceResult<Vec<String>> {
        let today = self.today();
        let mut book = self.book.lock().await;

        let pages = book
            .paginate(page_size)?
            .map(|page| {
                page.into_iter()
                    .map(|(_, record)| record.render(today))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>();

        debug!(page_size, pages = pages.len(), "Book paginated");
        Ok(pages)
    }
}
