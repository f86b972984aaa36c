use async_trait::async_trait;

use super::CommandHandler;
use crate::config::SiteConfig;
use crate::Result;

/// Handler for the `book` command
pub struct BookCommand {
    pub config: SiteConfig,
}

#[async_trait]
impl CommandHandler for BookCommand {
    #[cfg(feature = "tui")]
    async fn execute(&self) -> Result<()> {
        crate::cli::tui::run_booking_wizard(self.config.clone()).await
    }

    #[cfg(not(feature = "tui"))]
    async fn execute(&self) -> Result<()> {
        Err(crate::JumpzoneError::Cli(
            "jumpzone was built without the `tui` feature; rebuild with --features tui".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "book"
    }
}

impl BookCommand {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}
