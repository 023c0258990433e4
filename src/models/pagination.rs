//! Page-by-page iteration over an address book.
//!
//! Two flavours share the same slicing rule: [`Pages`] drives the cursor
//! stored inside the [`AddressBook`], while [`PageCursor`] is a standalone
//! value that leaves the book untouched.

use super::address_book::AddressBook;
use super::record::Record;
use crate::domain::ValidationError;
use crate::error::ContactResult;
use indexmap::IndexMap;

/// One page of `(name, record)` pairs in canonical order.
pub type Page<'a> = Vec<(&'a str, &'a Record)>;

fn page_at(records: &IndexMap<String, Record>, start: usize, page_size: usize) -> Page<'_> {
    let end = start.saturating_add(page_size).min(records.len());
    (start..end)
        .filter_map(|i| records.get_index(i))
        .map(|(name, record)| (name.as_str(), record))
        .collect()
}

pub(crate) fn check_page_size(page_size: usize) -> ContactResult<()> {
    if page_size == 0 {
        return Err(ValidationError::InvalidPageSize(page_size.to_string()).into());
    }
    Ok(())
}

/// Iterator returned by [`AddressBook::paginate`].
///
/// Every page consumed advances the book's cursor by the page size, so a
/// dropped iterator leaves the cursor where a later call can resume.
#[derive(Debug)]
pub struct Pages<'a> {
    records: &'a IndexMap<String, Record>,
    cursor: &'a mut usize,
    page_size: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(
        records: &'a IndexMap<String, Record>,
        cursor: &'a mut usize,
        page_size: usize,
    ) -> Self {
        Self {
            records,
            cursor,
            page_size,
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        let start = *self.cursor;
        if start >= records.len() {
            return None;
        }

        let page = page_at(records, start, self.page_size);
        *self.cursor = start.saturating_add(self.page_size);
        Some(page)
    }
}

/// A detached pagination position.
///
/// # Example
///
/// ```
/// use contact_book::models::{AddressBook, PageCursor, Record};
///
/// let mut book = AddressBook::new();
/// for name in ["Ann", "Ben", "Cid"] {
///     book.add_record(Record::new(name, None).unwrap());
/// }
///
/// let mut cursor = PageCursor::new(2).unwrap();
/// assert_eq!(cursor.next_page(&book).map(|p| p.len()), Some(2));
/// assert_eq!(cursor.next_page(&book).map(|p| p.len()), Some(1));
/// assert!(cursor.next_page(&book).is_none());
/// assert_eq!(book.cursor(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    page_size: usize,
}

impl PageCursor {
    /// Start at the first record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` for a page size of zero.
    pub fn new(page_size: usize) -> ContactResult<Self> {
        check_page_size(page_size)?;
        Ok(Self {
            offset: 0,
            page_size,
        })
    }

    /// Index of the first record of the next page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Take the next page from `book`, or `None` once the book is exhausted.
    pub fn next_page<'a>(&mut self, book: &'a AddressBook) -> Option<Page<'a>> {
        let records = book.entries();
        if self.offset >= records.len() {
            return None;
        }

        let page = page_at(records, self.offset, self.page_size);
        self.offset = self.offset.saturating_add(self.page_size);
        Some(page)
    }
}
