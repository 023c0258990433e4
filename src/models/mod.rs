//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record, together with its pagination helpers.

pub mod address_book;
pub mod pagination;
pub mod record;

pub use address_book::AddressBook;
pub use pagination::{Page, PageCursor, Pages};
pub use record::Record;
