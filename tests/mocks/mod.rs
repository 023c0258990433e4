//! Test doubles shared by the integration tests.

mod mock_address_book_repository;

pub use mock_address_book_repository::MockAddressBookRepository;
