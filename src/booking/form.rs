//! Booking form fields and their grouping into wizard steps

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::JumpzoneError;

/// Every field the booking form carries.
///
/// Serialized names are the camelCase keys used by booking files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ParentName,
    Email,
    Phone,
    ChildName,
    ChildAge,
    Package,
    PartyDate,
    PartyTime,
    GuestCount,
    Message,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::ParentName,
        Field::Email,
        Field::Phone,
        Field::ChildName,
        Field::ChildAge,
        Field::Package,
        Field::PartyDate,
        Field::PartyTime,
        Field::GuestCount,
        Field::Message,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ParentName => "parentName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ChildName => "childName",
            Field::ChildAge => "childAge",
            Field::Package => "package",
            Field::PartyDate => "partyDate",
            Field::PartyTime => "partyTime",
            Field::GuestCount => "guestCount",
            Field::Message => "message",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::ParentName => "Parent's Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::ChildName => "Child's Name",
            Field::ChildAge => "Child's Age",
            Field::Package => "Package",
            Field::PartyDate => "Party Date",
            Field::PartyTime => "Time Slot",
            Field::GuestCount => "Guests",
            Field::Message => "Special Requests",
        }
    }

    /// The step that owns this field
    pub fn step(&self) -> Step {
        match self {
            Field::ParentName | Field::Email | Field::Phone => Step::Contact,
            Field::ChildName | Field::ChildAge | Field::Package => Step::Party,
            Field::PartyDate | Field::PartyTime | Field::GuestCount | Field::Message => {
                Step::Schedule
            }
        }
    }

    /// Whether the field is chosen from a fixed option list
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            Field::ChildAge | Field::Package | Field::PartyTime | Field::GuestCount
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = JumpzoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| JumpzoneError::InvalidBooking(format!("unknown field '{s}'")))
    }
}

/// A step of the booking wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Contact,
    Party,
    Schedule,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Contact, Step::Party, Step::Schedule];

    pub fn index(&self) -> usize {
        match self {
            Step::Contact => 0,
            Step::Party => 1,
            Step::Schedule => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    /// Next step, saturating at the last one
    pub fn next(&self) -> Step {
        Step::from_index(self.index() + 1).unwrap_or(*self)
    }

    /// Previous step, saturating at the first one
    pub fn previous(&self) -> Step {
        self.index()
            .checked_sub(1)
            .and_then(Step::from_index)
            .unwrap_or(*self)
    }

    pub fn is_last(&self) -> bool {
        *self == Step::Schedule
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Contact => "Contact Info",
            Step::Party => "Party Details",
            Step::Schedule => "Date & Time",
        }
    }

    /// Fields owned by this step, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Contact => &[Field::ParentName, Field::Email, Field::Phone],
            Step::Party => &[Field::ChildName, Field::ChildAge, Field::Package],
            Step::Schedule => &[
                Field::PartyDate,
                Field::PartyTime,
                Field::GuestCount,
                Field::Message,
            ],
        }
    }
}

/// Raw form values exactly as the user typed or picked them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub child_name: String,
    pub child_age: String,
    pub package: String,
    pub party_date: String,
    pub party_time: String,
    pub guest_count: String,
    pub message: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ParentName => &self.parent_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ChildName => &self.child_name,
            Field::ChildAge => &self.child_age,
            Field::Package => &self.package,
            Field::PartyDate => &self.party_date,
            Field::PartyTime => &self.party_time,
            Field::GuestCount => &self.guest_count,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ParentName => &mut self.parent_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::ChildName => &mut self.child_name,
            Field::ChildAge => &mut self.child_age,
            Field::Package => &mut self.package,
            Field::PartyDate => &mut self.party_date,
            Field::PartyTime => &mut self.party_time,
            Field::GuestCount => &mut self.guest_count,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field is still empty
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_groups_are_disjoint_and_cover_every_field() {
        let mut seen = Vec::new();
        for step in Step::ALL {
            for field in step.fields() {
                assert_eq!(field.step(), step);
                assert!(!seen.contains(field), "{field} listed twice");
                seen.push(*field);
            }
        }
        assert_eq!(seen.len(), Field::ALL.len());
    }

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(Step::Contact.previous(), Step::Contact);
        assert_eq!(Step::Contact.next(), Step::Party);
        assert_eq!(Step::Schedule.next(), Step::Schedule);
        assert_eq!(Step::from_index(3), None);
    }

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("favouriteColour".parse::<Field>().is_err());
    }

    #[test]
    fn test_form_deserializes_with_missing_keys() {
        let form: BookingForm =
            serde_json::from_str(r#"{"parentName": "Priya", "childAge": "5"}"#).unwrap();
        assert_eq!(form.get(Field::ParentName), "Priya");
        assert_eq!(form.get(Field::ChildAge), "5");
        assert_eq!(form.get(Field::Email), "");
    }
}
