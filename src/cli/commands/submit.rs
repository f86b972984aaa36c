use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::{format_errors, load_form, CommandHandler};
use crate::booking::{
    BookingConfirmation, BookingWizard, DateSource, SimulatedSubmitter, Submitter, SubmitBlocked,
    SubmitOutcome,
};
use crate::cli::app::OutputFormat;
use crate::config::SiteConfig;
use crate::{JumpzoneError, Result};

/// Handler for the `submit` command
pub struct SubmitCommand {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub dates: DateSource,
    submitter: Arc<dyn Submitter>,
}

#[async_trait]
impl CommandHandler for SubmitCommand {
    async fn execute(&self) -> Result<()> {
        let confirmation = self.confirm().await?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&confirmation)?),
            OutputFormat::Text => {
                let request = &confirmation.request;
                println!("🎉 Party booked! Reference {}", confirmation.reference);
                println!(
                    "   {} for {} (age {}), {} at {}, {} guests",
                    request.package.display_name(),
                    request.child_name,
                    request.child_age,
                    request.party_date.format("%a %d %b %Y"),
                    request.party_time,
                    request.guest_count,
                );
                println!("   We'll call {} on {} to confirm.", request.parent_name, request.phone);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "submit"
    }
}

impl SubmitCommand {
    /// Create new submit command using the simulated submitter from the site config
    pub fn new(file: PathBuf, format: OutputFormat, config: &SiteConfig) -> Self {
        Self {
            file,
            format,
            dates: DateSource::System,
            submitter: Arc::new(SimulatedSubmitter::new(config.booking.submit_delay())),
        }
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    pub fn with_date_source(mut self, dates: DateSource) -> Self {
        self.dates = dates;
        self
    }

    /// Drive a wizard through every step with the file's values and submit it
    pub async fn confirm(&self) -> Result<BookingConfirmation> {
        let form = load_form(&self.file)?;
        let mut wizard = BookingWizard::new()
            .with_date_source(self.dates)
            .with_form(form);

        while !wizard.step().is_last() {
            if !wizard.advance() {
                return Err(invalid_step(&wizard));
            }
        }

        match wizard.submit(self.submitter.as_ref()).await {
            SubmitOutcome::Confirmed(confirmation) => {
                info!(reference = %confirmation.reference, "Booking submitted from file");
                Ok(confirmation)
            }
            SubmitOutcome::Blocked(SubmitBlocked::Invalid) => Err(invalid_step(&wizard)),
            SubmitOutcome::Blocked(blocked) => Err(JumpzoneError::InvalidBooking(format!(
                "submission could not start: {:?}",
                blocked
            ))),
            SubmitOutcome::Failed(error) => Err(error.into()),
            SubmitOutcome::Discarded => Err(JumpzoneError::InvalidBooking(
                "submission result was discarded".to_string(),
            )),
        }
    }
}

fn invalid_step(wizard: &BookingWizard) -> JumpzoneError {
    JumpzoneError::InvalidBooking(format!(
        "step {} ({}) is incomplete:\n{}",
        wizard.step().index(),
        wizard.step().title(),
        format_errors(wizard.errors())
    ))
}
