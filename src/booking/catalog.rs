//! Fixed option lists offered by the booking form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::form::Field;
use crate::JumpzoneError;

/// Time slots a party can start at
pub const TIME_SLOTS: [&str; 5] = ["10:00 AM", "12:00 PM", "2:00 PM", "4:00 PM", "6:00 PM"];

/// Guest count bands
pub const GUEST_BANDS: [&str; 5] = ["Up to 10", "10\u{2013}15", "15\u{2013}25", "25\u{2013}40", "40+"];

/// Youngest and oldest age the parks host parties for
pub const MIN_CHILD_AGE: u8 = 1;
pub const MAX_CHILD_AGE: u8 = 15;

/// Birthday party packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    Mini,
    Classic,
    Mega,
    Royal,
}

impl Package {
    pub const ALL: [Package; 4] = [Package::Mini, Package::Classic, Package::Mega, Package::Royal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Mini => "mini",
            Package::Classic => "classic",
            Package::Mega => "mega",
            Package::Royal => "royal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Package::Mini => "Mini Bounce",
            Package::Classic => "Classic Jump",
            Package::Mega => "Mega Party",
            Package::Royal => "Royal Celebration",
        }
    }

    /// Price in rupees
    pub fn price_inr(&self) -> u32 {
        match self {
            Package::Mini => 9_999,
            Package::Classic => 14_999,
            Package::Mega => 19_999,
            Package::Royal => 29_999,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Package::Mini => 90,
            Package::Classic => 120,
            Package::Mega => 150,
            Package::Royal => 180,
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Package::Mini => &["60 min jump time", "Party room", "Basic decor"],
            Package::Classic => &[
                "90 min jump time",
                "Party room",
                "Themed decor",
                "Snacks & drinks",
            ],
            Package::Mega => &[
                "2 hr jump time",
                "Private party room",
                "Themed decor",
                "Meal & cake",
                "Party host",
            ],
            Package::Royal => &[
                "Unlimited jump time",
                "Exclusive zone",
                "Premium decor",
                "Full meal & cake",
                "Party host",
                "Return gifts",
            ],
        }
    }

    /// Price formatted with Indian digit grouping, e.g. `₹14,999`
    pub fn price_label(&self) -> String {
        format_inr(self.price_inr())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Package {
    type Err = JumpzoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Package::ALL
            .iter()
            .copied()
            .find(|package| package.as_str() == s)
            .ok_or_else(|| JumpzoneError::InvalidBooking(format!("unknown package '{s}'")))
    }
}

/// Accepted child ages as the strings the form stores
pub fn child_age_options() -> Vec<String> {
    (MIN_CHILD_AGE..=MAX_CHILD_AGE).map(|age| age.to_string()).collect()
}

/// Options for a select field, `None` for free-text fields
pub fn options_for(field: Field) -> Option<Vec<String>> {
    match field {
        Field::ChildAge => Some(child_age_options()),
        Field::Package => Some(Package::ALL.iter().map(|p| p.as_str().to_string()).collect()),
        Field::PartyTime => Some(TIME_SLOTS.iter().map(|s| s.to_string()).collect()),
        Field::GuestCount => Some(GUEST_BANDS.iter().map(|s| s.to_string()).collect()),
        _ => None,
    }
}

fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("\u{20b9}{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("\u{20b9}{},{}", groups.join(","), tail)
}
