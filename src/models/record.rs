//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{ContactError, ContactResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Unique key of the contact
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// `birthday` of `None` or `Some("")` leaves the birthday unset.
    ///
    /// # Errors
    ///
    /// - `ContactError::InsufficientArguments` if `name` is empty
    /// - `ContactError::Validation` if the name is blank or the birthday is malformed
    pub fn new(name: &str, birthday: Option<&str>) -> ContactResult<Self> {
        if name.is_empty() {
            return Err(ContactError::insufficient("record", 1, 0));
        }

        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(raw) => Birthday::parse_optional(raw)?,
            None => None,
        };

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Replace the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<Phone> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| ContactError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The phone list is untouched when either step fails.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// Look up a phone by value.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Days from `today` to the next birthday, or `None` without a birthday.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// One-line summary with the birthday countdown computed against `today`.
    pub fn render(&self, today: NaiveDate) -> String {
        let mut line = format!("Contact name: {}", self.name);

        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            line.push_str(&format!(", phones: {}", phones.join(", ")));
        }

        if let Some(birthday) = &self.birthday {
            line.push_str(&format!(", birthday: {}", birthday));
            if let Some(days) = birthday.days_until(today) {
                line.push_str(&format!(", days to birthday: {}", days));
            }
        }

        line
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(chrono::Local::now().date_naive()))
    }
}
