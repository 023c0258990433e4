//! Birthday value object and the days-until-birthday arithmetic.

use super::errors::ValidationError;
use super::field::{impl_field_traits, Field};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Storage format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts single-digit months and days, so pin the shape first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile birthday regex"));

/// A calendar date of birth in strict `YYYY-MM-DD` form.
///
/// Both the shape and the date itself are checked, so `2024-13-01` and
/// `2023-02-29` are rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("1990-06-16").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(birthday.days_until(today), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a real
    /// `YYYY-MM-DD` date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Parse an optional birthday where the empty string means "not set".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ValidationError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first anniversary on or after `today`.
    ///
    /// Feb 29 birthdays fall on Feb 28 in non-leap years. Returns `None` only
    /// when the anniversary lies outside chrono's representable range.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `today` to the next anniversary; zero on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }

    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            // only Feb 29 can be missing from a year
            NaiveDate::from_ymd_opt(year, month, day - 1)
        })
    }
}

impl Field for Birthday {
    const KIND: &'static str = "birthday";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

impl_field_traits!(Birthday);
