/// Interactive booking wizard implementation
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use crate::config::SiteConfig;
use crate::Result;

/// Entry point for the booking wizard
pub async fn run(config: SiteConfig) -> Result<()> {
    let app = app::App::new(config);
    app.run().await
}
