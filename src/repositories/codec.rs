//! JSON encoding of a whole address book.
//!
//! The document is `{"contacts": [record, ...]}` in canonical order. Field
//! values are validated again on decode, and the pagination cursor is not
//! stored.

use crate::error::StoreResult;
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct BookDocumentRef<'a> {
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookDocument {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Encode `book` as pretty-printed JSON.
pub fn serialize(book: &AddressBook) -> StoreResult<Vec<u8>> {
    let document = BookDocumentRef {
        contacts: book.records().collect(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Rebuild a book from bytes produced by [`serialize`].
///
/// Empty or whitespace-only input decodes to an empty book.
pub fn deserialize(bytes: &[u8]) -> StoreResult<AddressBook> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(AddressBook::new());
    }

    let document: BookDocument = serde_json::from_slice(bytes)?;
    Ok(document.contacts.into_iter().collect())
}
