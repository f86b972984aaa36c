//! Step-scoped validation of the booking form

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{self, Package};
use super::form::{BookingForm, Field, Step};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 10;

/// Date format accepted for `partyDate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sparse map of field to the message explaining why it is invalid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the message for one field, returning whether it was present
    pub fn remove(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Merge another map in, keeping existing messages on conflict
    pub fn extend(&mut self, other: ErrorMap) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }
}

/// Validate the fields owned by `step`. An empty map means the step is valid.
///
/// Pure: depends only on the form and the supplied `today`.
pub fn validate_step(step: Step, form: &BookingForm, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Contact => {
            if is_blank(&form.parent_name) {
                errors.insert(Field::ParentName, "Please enter your name");
            }
            if !is_valid_email(&form.email) {
                errors.insert(Field::Email, "Please enter a valid email address");
            }
            if phone_digits(&form.phone).len() < MIN_PHONE_DIGITS {
                errors.insert(
                    Field::Phone,
                    format!("Please enter a valid phone number (at least {MIN_PHONE_DIGITS} digits)"),
                );
            }
        }
        Step::Party => {
            if is_blank(&form.child_name) {
                errors.insert(Field::ChildName, "Please enter the birthday child's name");
            }
            if parse_child_age(&form.child_age).is_none() {
                errors.insert(Field::ChildAge, "Please select the child's age");
            }
            if form.package.parse::<Package>().is_err() {
                errors.insert(Field::Package, "Please choose a party package");
            }
        }
        Step::Schedule => {
            if let Err(message) = check_party_date(&form.party_date, today) {
                errors.insert(Field::PartyDate, message);
            }
            if !catalog::TIME_SLOTS.contains(&form.party_time.as_str()) {
                errors.insert(Field::PartyTime, "Please choose a time slot");
            }
            if !catalog::GUEST_BANDS.contains(&form.guest_count.as_str()) {
                errors.insert(Field::GuestCount, "Please select the number of guests");
            }
        }
    }
    errors
}

/// Validate every step at once
pub fn validate_all(form: &BookingForm, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for step in Step::ALL {
        errors.extend(validate_step(step, form, today));
    }
    errors
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Digits of a phone number with every separator stripped
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn parse_child_age(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|age| (catalog::MIN_CHILD_AGE..=catalog::MAX_CHILD_AGE).contains(age))
}

pub fn parse_party_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn check_party_date(value: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    if is_blank(value) {
        return Err("Please pick a party date");
    }
    let date = parse_party_date(value).ok_or("Please pick a valid date (YYYY-MM-DD)")?;
    if date < today {
        return Err("Party date cannot be in the past");
    }
    Ok(date)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
