//! Integration tests for command dispatch and the read loop.
//!
//! These tests drive the interpreter with the same text a user would type
//! and check the exact replies.

mod mocks;

use chrono::NaiveDate;
use contact_book::commands::{
    CommandDispatcher, Reply, BAD_PARAMETERS, CONTACT_NOT_FOUND, EMPTY_BOOK, FAREWELL, GREETING,
    UNKNOWN_COMMAND,
};
use contact_book::models::AddressBook;
use contact_book::repl;
use contact_book::services::{ContactService, ContactServiceImpl};
use mocks::MockAddressBookRepository;
use std::sync::Arc;

fn dispatcher(repo: &MockAddressBookRepository, page_size: usize) -> CommandDispatcher {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let service = ContactServiceImpl::new(AddressBook::new(), Arc::new(repo.clone()))
        .with_today(today);
    CommandDispatcher::new(Arc::new(service) as Arc<dyn ContactService>, page_size)
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("Expected text reply, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_hello_and_unknown() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);

    assert_eq!(text(d.dispatch("hello").await), GREETING);
    assert_eq!(text(d.dispatch("HeLLo").await), GREETING);
    assert_eq!(text(d.dispatch("dance").await), UNKNOWN_COMMAND);
}

#[tokio::test]
async fn test_exit_words() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);

    for line in ["exit", "close", "good bye", "Good Bye"] {
        assert_eq!(d.dispatch(line).await, Reply::Exit(FAREWELL.to_string()));
    }
}

#[tokio::test]
async fn test_add_messages() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);

    assert_eq!(
        text(d.dispatch("add Alice 0501234567 0671234567").await),
        "User Alice has been added to the phone book with phone number(s) 0501234567, 0671234567"
    );
    assert_eq!(
        text(d.dispatch("add Bob 0501234567 1990-06-16").await),
        "User Bob has been added to the phone book with phone number(s) 0501234567 and birthday on 1990-06-16"
    );
    assert_eq!(
        text(d.dispatch("add Carol 1990-06-16").await),
        "User Carol has been added to the phone book with no phone numbers and birthday on 1990-06-16"
    );
}

#[tokio::test]
async fn test_add_bad_parameters() {
    let repo = MockAddressBookRepository::new();
    let d = dispatcher(&repo, 5);

    assert_eq!(text(d.dispatch("add Alice").await), BAD_PARAMETERS);
    assert_eq!(text(d.dispatch("add Alice 12345").await), BAD_PARAMETERS);
    assert_eq!(text(d.dispatch("add Alice 1990-13-01").await), BAD_PARAMETERS);
    assert_eq!(repo.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_phone_lookup() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);
    d.dispatch("add Alice 0501234567 1990-06-16").await;

    assert_eq!(
        text(d.dispatch("phone Alice").await),
        "Contact name: Alice, phones: 0501234567, birthday: 1990-06-16, days to birthday: 1"
    );
    assert_eq!(text(d.dispatch("phone alice").await), CONTACT_NOT_FOUND);
    assert_eq!(text(d.dispatch("phone").await), BAD_PARAMETERS);
}

#[tokio::test]
async fn test_change_command() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);
    d.dispatch("add Alice 0501234567").await;

    assert_eq!(
        text(d.dispatch("change Alice 0501234567 0939999999").await),
        "Phone number for user Alice has been changed to 0939999999"
    );
    assert_eq!(
        text(d.dispatch("change Nobody 0501234567 0939999999").await),
        CONTACT_NOT_FOUND
    );
    assert_eq!(
        text(d.dispatch("change Alice 0939999999 bad").await),
        BAD_PARAMETERS
    );
    assert_eq!(
        text(d.dispatch("change Alice 0501234567 0930000000").await),
        "The contact has no phone number 0501234567"
    );
}

#[tokio::test]
async fn test_delete_and_show_all() {
    let repo = MockAddressBookRepository::new();
    let d = dispatcher(&repo, 5);
    assert_eq!(text(d.dispatch("show all").await), EMPTY_BOOK);

    d.dispatch("add Alice 0501234567").await;
    d.dispatch("add Bob 0671234567").await;
    assert_eq!(
        text(d.dispatch("show all").await),
        "Contact name: Alice, phones: 0501234567\nContact name: Bob, phones: 0671234567"
    );

    assert_eq!(
        text(d.dispatch("del Alice").await),
        "User Alice has been deleted from the phone book"
    );
    assert_eq!(
        text(d.dispatch("del Ghost").await),
        "User Ghost has been deleted from the phone book"
    );
    assert_eq!(repo.stored().unwrap().len(), 1);
}

#[tokio::test]
async fn test_show_iterated() {
    let d = dispatcher(&MockAddressBookRepository::new(), 2);
    for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        d.dispatch(&format!("add {} 050000000{}", name, i)).await;
    }

    match d.dispatch("show iterated").await {
        Reply::Pages(pages) => assert_eq!(pages.len(), 3),
        other => panic!("Expected pages, got: {:?}", other),
    }
    match d.dispatch("show iterated 4").await {
        Reply::Pages(pages) => assert_eq!(pages.len(), 2),
        other => panic!("Expected pages, got: {:?}", other),
    }
    assert_eq!(text(d.dispatch("show iterated zero").await), BAD_PARAMETERS);
    assert_eq!(text(d.dispatch("show iterated 0").await), BAD_PARAMETERS);
}

#[tokio::test]
async fn test_repl_session() {
    let d = dispatcher(&MockAddressBookRepository::new(), 2);
    let input = b"hello\n\nadd Alice 0501234567\nadd Bob 0671234567\nadd Carol 0931234567\nshow iterated\n\n\nexit\nhello\n";
    let mut output = Vec::new();

    repl::run(&d, &input[..], &mut output).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with(">>>: How can I help you?\n"));
    assert!(output.contains(
        "Press Enter for next records\n\
         Contact name: Alice, phones: 0501234567\n\
         Contact name: Bob, phones: 0671234567\n\
         Press Enter for next records\n\
         Contact name: Carol, phones: 0931234567\n\
         End of the phone book\n"
    ));
    assert!(output.ends_with(">>>: Goodbye!\n"));
    // nothing after exit is processed
    assert_eq!(output.matches(GREETING).count(), 1);
}

#[tokio::test]
async fn test_repl_ends_on_eof() {
    let d = dispatcher(&MockAddressBookRepository::new(), 5);
    let mut output = Vec::new();

    repl::run(&d, &b"hello\n"[..], &mut output).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(output, ">>>: How can I help you?\n>>>: ");
}
