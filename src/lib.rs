//! Contact Book - a personal contact manager driven by a line-oriented interpreter.
//!
//! Contacts have a unique name, any number of ten-digit phone numbers and an
//! optional birthday. The whole book is persisted as one JSON document after
//! every change.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: Contact records and the address book with pagination
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **services**: Locking, persistence and rendering around the book
//! - **commands**: Command table, parsing and user messages
//! - **repl**: The interactive read loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;
pub mod services;

pub use commands::{CommandDispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, ContactError, ErrorKind, ServiceError, StoreError};
pub use models::{AddressBook, PageCursor, Pages, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::{ContactService, ContactServiceImpl};
