//! The address book: contacts keyed by name.

use super::pagination::{check_page_size, PageCursor, Pages};
use super::record::Record;
use crate::error::ContactResult;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// A name-keyed collection of records plus a pagination cursor.
///
/// Records iterate in insertion order. Re-adding a name replaces the record
/// but keeps its original position. The cursor is volatile state: it is not
/// part of equality and is not persisted.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
    cursor: usize,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name, and rewind
    /// the pagination cursor.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
        self.cursor = 0;
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by exact name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current pagination cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Records in canonical order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub(crate) fn entries(&self) -> &IndexMap<String, Record> {
        &self.records
    }

    /// Page through the book using the stored cursor.
    ///
    /// Iteration resumes where the previous call stopped. Once the cursor
    /// has reached the end, the next call starts over from the first record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` for a page size of zero.
    pub fn paginate(&mut self, page_size: usize) -> ContactResult<Pages<'_>> {
        check_page_size(page_size)?;
        if self.cursor >= self.records.len() {
            self.cursor = 0;
        }
        Ok(Pages::new(&self.records, &mut self.cursor, page_size))
    }

    /// A detached cursor over this book that never touches stored state.
    pub fn pages(&self, page_size: usize) -> ContactResult<PageCursor> {
        PageCursor::new(page_size)
    }

    /// Every record rendered on its own line.
    pub fn render(&self, today: NaiveDate) -> String {
        self.records
            .values()
            .map(|record| record.render(today))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for AddressBook {}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name, None).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        let alice = record("Alice", "1111111111");
        book.add_record(alice.clone());

        assert_eq!(book.find("Alice"), Some(&alice));
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn test_add_replaces_existing() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(record("Bob", "2222222222"));
        book.add_record(record("Alice", "3333333333"));

        assert_eq!(book.len(), 2);
        let alice = book.find("Alice").unwrap();
        assert!(alice.find_phone("1111111111").is_none());
        assert!(alice.find_phone("3333333333").is_some());

        // the replaced record keeps its slot
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);

        assert!(book.delete("Alice").is_some());
        assert!(book.find("Alice").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book: AddressBook = ["A", "B", "C"]
            .into_iter()
            .map(|n| Record::new(n, None).unwrap())
            .collect();
        book.delete("B");

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_paginate_page_sizes() {
        let mut book: AddressBook = (0..5)
            .map(|i| Record::new(&format!("c{i}"), None).unwrap())
            .collect();

        let pages: Vec<Vec<String>> = book
            .paginate(2)
            .unwrap()
            .map(|page| page.into_iter().map(|(name, _)| name.to_string()).collect())
            .collect();

        assert_eq!(
            pages,
            vec![
                vec!["c0".to_string(), "c1".to_string()],
                vec!["c2".to_string(), "c3".to_string()],
                vec!["c4".to_string()],
            ]
        );
        assert_eq!(book.cursor(), 6);
    }

    #[test]
    fn test_paginate_resumes_then_restarts() {
        let mut book: AddressBook = (0..5)
            .map(|i| Record::new(&format!("c{i}"), None).unwrap())
            .collect();

        let first = book.paginate(2).unwrap().next().unwrap();
        assert_eq!(first[0].0, "c0");
        assert_eq!(book.cursor(), 2);

        let rest: Vec<usize> = book.paginate(2).unwrap().map(|p| p.len()).collect();
        assert_eq!(rest, vec![2, 1]);

        let again: Vec<usize> = book.paginate(2).unwrap().map(|p| p.len()).collect();
        assert_eq!(again, vec![2, 2, 1]);
    }

    #[test]
    fn test_add_record_resets_cursor() {
        let mut book: AddressBook = (0..4)
            .map(|i| Record::new(&format!("c{i}"), None).unwrap())
            .collect();
        book.paginate(3).unwrap().next();
        assert_eq!(book.cursor(), 3);

        book.add_record(Record::new("c9", None).unwrap());
        assert_eq!(book.cursor(), 0);
    }

    #[test]
    fn test_paginate_zero_is_rejected() {
        let mut book = AddressBook::new();
        assert!(book.paginate(0).is_err());
    }

    #[test]
    fn test_paginate_empty_book() {
        let mut book = AddressBook::new();
        assert_eq!(book.paginate(3).unwrap().count(), 0);
    }

    #[test]
    fn test_detached_pages_leave_cursor() {
        let book: AddressBook = (0..3)
            .map(|i| Record::new(&format!("c{i}"), None).unwrap())
            .collect();
        let mut cursor = book.pages(2).unwrap();
        while cursor.next_page(&book).is_some() {}
        assert_eq!(book.cursor(), 0);
    }

    #[test]
    fn test_render() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(Record::new("Bob", Some("1990-06-16")).unwrap());

        assert_eq!(
            book.render(today()),
            "Contact name: Alice, phones: 1111111111\n\
             Contact name: Bob, birthday: 1990-06-16, days to birthday: 1"
        );
    }

    #[test]
    fn test_equality_ignores_cursor() {
        let mut a: AddressBook = (0..3)
            .map(|i| Record::new(&format!("c{i}"), None).unwrap())
            .collect();
        let b = a.clone();
        a.paginate(1).unwrap().next();
        assert_eq!(a, b);
    }
}
