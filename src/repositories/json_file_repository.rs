use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::models::AddressBook;
use crate::repositories::codec;
use crate::repositories::traits::AddressBookRepository;

/// Address book repository backed by a JSON file.
///
/// A missing or empty file loads as an empty book. Saves go to a sibling
/// temporary file that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the contacts file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl AddressBookRepository for JsonFileRepository {
    async fn load(&self) -> StoreResult<AddressBook> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No contacts file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book = codec::deserialize(&bytes)?;
        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let bytes = codec::serialize(book)?;
        let temp = self.temp_path();

        fs::write(&temp, &bytes).await?;
        fs::rename(&temp, &self.path).await?;

        debug!(
            path = %self.path.display(),
            records = book.len(),
            bytes = bytes.len(),
            "Address book saved"
        );
        Ok(())
    }
}
