//! Command layer for the contact book interpreter.
//!
//! Turns a line of user input into a service call and the service result
//! into text. Errors are mapped to messages by kind, never by their text.

pub mod parser;

pub use parser::{parse, Command, CommandSpec, ParsedCommand, COMMANDS};

use crate::domain::ValidationError;
use crate::error::{ContactError, ErrorKind, ServiceError, ServiceResult};
use crate::services::ContactService;
use std::sync::Arc;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try again.";
pub const CONTACT_NOT_FOUND: &str =
    "There is no such contact in the phone book. Please, use command 'Add...' first";
pub const PHONE_NOT_FOUND: &str = "The contact has no phone number";
pub const BAD_PARAMETERS: &str = "Not enough params or wrong phone format";
pub const EMPTY_BOOK: &str = "The phone book is empty";

/// What the interpreter should do with a handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text.
    Text(String),
    /// Print each page, pausing between them.
    Pages(Vec<String>),
    /// Print the text and end the session.
    Exit(String),
}

/// Map a service error to the message shown to the user.
pub fn error_message(err: &ServiceError) -> String {
    if let ServiceError::Contact(ContactError::PhoneNotFound(phone)) = err {
        return format!("{} {}", PHONE_NOT_FOUND, phone);
    }

    match err.kind() {
        Some(ErrorKind::NotFound) => CONTACT_NOT_FOUND.to_string(),
        Some(ErrorKind::Validation) | Some(ErrorKind::InsufficientArguments) => {
            BAD_PARAMETERS.to_string()
        }
        None => err.to_string(),
    }
}

/// Routes parsed commands to a [`ContactService`].
pub struct CommandDispatcher {
    service: Arc<dyn ContactService>,
    default_page_size: usize,
}

impl CommandDispatcher {
    /// Create a dispatcher; `default_page_size` is used by `show iterated`
    /// when no size is given.
    pub fn new(service: Arc<dyn ContactService>, default_page_size: usize) -> Self {
        Self {
            service,
            default_page_size,
        }
    }

    /// Handle one line of input.
    pub async fn dispatch(&self, line: &str) -> Reply {
        let Some(parsed) = parse(line) else {
            return Reply::Text(UNKNOWN_COMMAND.to_string());
        };

        match self.execute(&parsed).await {
            Ok(reply) => reply,
            Err(err) => {
                debug!(command = %parsed.keyword, error = %err, "Command failed");
                Reply::Text(error_message(&err))
            }
        }
    }

    async fn execute(&self, parsed: &ParsedCommand) -> ServiceResult<Reply> {
        if !parsed.has_min_args() {
            return Err(ContactError::insufficient(
                &parsed.keyword,
                parsed.min_args,
                parsed.args.len(),
            )
            .into());
        }

        let args = &parsed.args;
        match parsed.command {
            Command::Hello => Ok(Reply::Text(GREETING.to_string())),
            Command::Exit => Ok(Reply::Exit(FAREWELL.to_string())),
            Command::Add => {
                let added = self.service.add(&args[0], &args[1..]).await?;
                let phones = if added.phones.is_empty() {
                    "no phone numbers".to_string()
                } else {
                    format!("phone number(s) {}", added.phones.join(", "))
                };
                let birthday = added
                    .birthday
                    .map(|b| format!(" and birthday on {}", b))
                    .unwrap_or_default();
                Ok(Reply::Text(format!(
                    "User {} has been added to the phone book with {}{}",
                    added.name, phones, birthday
                )))
            }
            Command::Change => {
                let phones = self.service.change(&args[0], &args[1..]).await?;
                Ok(Reply::Text(format!(
                    "Phone number for user {} has been changed to {}",
                    args[0],
                    phones.join(", ")
                )))
            }
            Command::Phone => Ok(Reply::Text(self.service.find(&args[0]).await?)),
            Command::ShowAll => {
                let rendered = self.service.render_all().await;
                if rendered.is_empty() {
                    Ok(Reply::Text(EMPTY_BOOK.to_string()))
                } else {
                    Ok(Reply::Text(rendered))
                }
            }
            Command::ShowIterated => {
                let page_size = match args.first() {
                    Some(raw) => raw
                        .parse::<usize>()
                        .map_err(|_| ValidationError::InvalidPageSize(raw.clone()))?,
                    None => self.default_page_size,
                };
                Ok(Reply::Pages(self.service.paginate(page_size).await?))
            }
            Command::Delete => {
                self.service.delete(&args[0]).await?;
                Ok(Reply::Text(format!(
                    "User {} has been deleted from the phone book",
                    args[0]
                )))
            }
        }
    }
}
