use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Package;
use super::form::BookingForm;
use super::validation::{self, ErrorMap};

/// Typed projection of a fully valid [`BookingForm`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub parent_name: String,
    pub email: String,
    /// Digits only
    pub phone: String,
    pub child_name: String,
    pub child_age: u8,
    pub package: Package,
    pub party_date: NaiveDate,
    pub party_time: String,
    pub guest_count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingRequest {
    /// Build a request from a form, or return every validation failure across all steps.
    pub fn from_form(form: &BookingForm, today: NaiveDate) -> Result<Self, ErrorMap> {
        let errors = validation::validate_all(form, today);
        if !errors.is_empty() {
            return Err(errors);
        }

        // All three predicates hold, so each parse below succeeds.
        let (Some(child_age), Ok(package), Some(party_date)) = (
            validation::parse_child_age(&form.child_age),
            form.package.parse::<Package>(),
            validation::parse_party_date(&form.party_date),
        ) else {
            return Err(errors);
        };

        let message = form.message.trim();
        Ok(Self {
            parent_name: form.parent_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: validation::phone_digits(&form.phone),
            child_name: form.child_name.trim().to_string(),
            child_age,
            package,
            party_date,
            party_time: form.party_time.clone(),
            guest_count: form.guest_count.clone(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Reference quoted to the customer, e.g. `JZ-4F9A01BC`
    pub reference: String,
    pub request: BookingRequest,
    pub confirmed_at: DateTime<Utc>,
}

impl BookingConfirmation {
    pub fn new(request: BookingRequest) -> Self {
        Self {
            reference: new_reference(),
            request,
            confirmed_at: Utc::now(),
        }
    }
}

fn new_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    format!("JZ-{}", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let reference = new_reference();
        assert_eq!(reference.len(), 11);
        assert!(reference.starts_with("JZ-"));
        assert!(reference[3..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_blank_message_is_dropped() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let form = BookingForm {
            parent_name: " Priya Sharma ".into(),
            email: "p@example.com".into(),
            phone: "98765 43210".into(),
            child_name: "Aarav".into(),
            child_age: "5".into(),
            package: "classic".into(),
            party_date: "2026-05-02".into(),
            party_time: "2:00 PM".into(),
            guest_count: "15\u{2013}25".into(),
            message: "   ".into(),
        };
        let request = BookingRequest::from_form(&form, today).unwrap();
        assert_eq!(request.parent_name, "Priya Sharma");
        assert_eq!(request.phone, "9876543210");
        assert_eq!(request.package, Package::Classic);
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_invalid_form_reports_all_steps() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let errors = BookingRequest::from_form(&BookingForm::new(), today).unwrap_err();
        assert_eq!(errors.len(), 9);
    }
}
