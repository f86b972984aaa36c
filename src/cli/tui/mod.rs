/// Terminal User Interface module for interactive commands
pub mod booking;

use crate::config::SiteConfig;
use crate::Result;

/// Run the interactive booking wizard
pub async fn run_booking_wizard(config: SiteConfig) -> Result<()> {
    booking::run(config).await
}
