use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root of `jumpzone.yaml`: the static reference data every screen shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business: BusinessInfo,
    pub locations: Vec<Location>,
    pub navigation: Vec<NavLink>,
    pub booking: BookingSettings,
}

/// Public identity of the business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
}

/// A park location shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
}

/// A header navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// Timings of the booking flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    /// Delay between closing the modal and clearing the wizard
    pub reset_delay_ms: u64,
    /// Artificial latency of the simulated submission
    pub submit_delay_ms: u64,
}

impl BookingSettings {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            reset_delay_ms: 400,
            submit_delay_ms: 1500,
        }
    }
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "JumpZone".to_string(),
            tagline: "India's bounciest indoor trampoline park".to_string(),
            phone: "+91 98200 12345".to_string(),
            email: "hello@jumpzone.in".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business: BusinessInfo::default(),
            locations: vec![
                Location {
                    name: "JumpZone Andheri".to_string(),
                    address: "Infiniti Mall, Link Road, Andheri West, Mumbai".to_string(),
                    phone: "+91 98200 12345".to_string(),
                    hours: "10:00 AM - 10:00 PM".to_string(),
                },
                Location {
                    name: "JumpZone Koramangala".to_string(),
                    address: "80 Feet Road, Koramangala 4th Block, Bengaluru".to_string(),
                    phone: "+91 98450 67890".to_string(),
                    hours: "10:00 AM - 9:00 PM".to_string(),
                },
                Location {
                    name: "JumpZone Gurugram".to_string(),
                    address: "Sector 29, Gurugram, Haryana".to_string(),
                    phone: "+91 98110 24680".to_string(),
                    hours: "11:00 AM - 10:00 PM".to_string(),
                },
            ],
            navigation: [
                ("Home", "/"),
                ("Activities", "/activities"),
                ("Birthday Parties", "/birthday"),
                ("School Trips", "/school-trips"),
                ("Blog", "/blog"),
                ("About", "/about"),
                ("Contact", "/contact"),
            ]
            .into_iter()
            .map(|(label, path)| NavLink {
                label: label.to_string(),
                path: path.to_string(),
            })
            .collect(),
            booking: BookingSettings::default(),
        }
    }
}
