use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::{format_errors, load_form, CommandHandler};
use crate::booking::{validate_step, DateSource, ErrorMap, Step};
use crate::cli::app::OutputFormat;
use crate::{JumpzoneError, Result};

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub file: PathBuf,
    pub step: Option<Step>,
    pub format: OutputFormat,
    pub dates: DateSource,
}

/// Validation result for one step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub valid: bool,
    pub errors: ErrorMap,
}

/// Everything `validate` found
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub today: NaiveDate,
    pub valid: bool,
    pub steps: Vec<StepReport>,
}

impl ValidationReport {
    pub fn invalid_fields(&self) -> usize {
        self.steps.iter().map(|step| step.errors.len()).sum()
    }
}

#[async_trait]
impl CommandHandler for ValidateCommand {
    async fn execute(&self) -> Result<()> {
        let report = self.report()?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                for step in &report.steps {
                    if step.valid {
                        println!("✓ Step {} · {}", step.step.index(), step.step.title());
                    } else {
                        println!("✗ Step {} · {}", step.step.index(), step.step.title());
                        println!("{}", format_errors(&step.errors));
                    }
                }
            }
        }

        if report.valid {
            Ok(())
        } else {
            Err(JumpzoneError::InvalidBooking(format!(
                "{} field(s) failed validation",
                report.invalid_fields()
            )))
        }
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(file: PathBuf, step: Option<u8>, format: OutputFormat) -> Self {
        Self {
            file,
            step: step.and_then(|index| Step::from_index(index as usize)),
            format,
            dates: DateSource::System,
        }
    }

    /// Pin the date used for the party-date check
    pub fn with_date_source(mut self, dates: DateSource) -> Self {
        self.dates = dates;
        self
    }

    /// Load the file and validate the requested steps
    pub fn report(&self) -> Result<ValidationReport> {
        let form = load_form(&self.file)?;
        let today = self.dates.today();
        let steps: Vec<Step> = match self.step {
            Some(step) => vec![step],
            None => Step::ALL.to_vec(),
        };

        let steps: Vec<StepReport> = steps
            .into_iter()
            .map(|step| {
                let errors = validate_step(step, &form, today);
                debug!(step = ?step, invalid = errors.len(), "Validated step");
                StepReport {
                    step,
                    valid: errors.is_empty(),
                    errors,
                }
            })
            .collect();

        Ok(ValidationReport {
            today,
            valid: steps.iter().all(|step| step.valid),
            steps,
        })
    }
}
