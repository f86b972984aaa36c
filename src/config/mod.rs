//! Site configuration: business details, locations, navigation and booking timings

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ConfigSource};
pub use types::{BookingSettings, BusinessInfo, Location, NavLink, SiteConfig};
