//! The three-step booking wizard state machine
//!
//! ```text
//!   Contact ──advance──▶ Party ──advance──▶ Schedule ──submit──▶ Success
//!      ◀──retreat──────────┘ ◀──retreat────────┘
//! ```
//!
//! Forward edges are guarded by the active step's validation; backward edges
//! never are. `Success` stays until [`BookingWizard::reset`].

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use super::form::{BookingForm, Field, Step};
use super::request::{BookingConfirmation, BookingRequest};
use super::submit::Submitter;
use super::validation::{self, ErrorMap};
use crate::SubmissionError;

/// Where the wizard gets "today" from when checking the party date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// The local calendar date at the moment of validation
    System,
    Fixed(NaiveDate),
}

impl DateSource {
    pub fn today(&self) -> NaiveDate {
        match self {
            DateSource::System => Local::now().date_naive(),
            DateSource::Fixed(date) => *date,
        }
    }
}

/// Why a submission could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// The final step failed validation; the wizard's errors say why
    Invalid,
    NotOnFinalStep,
    InFlight,
    AlreadyConfirmed,
}

/// Result of [`BookingWizard::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed(BookingConfirmation),
    Blocked(SubmitBlocked),
    Failed(SubmissionError),
    /// A result arrived for a wizard that was no longer submitting
    Discarded,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: Step,
    form: BookingForm,
    errors: ErrorMap,
    submitting: bool,
    success: bool,
    confirmation: Option<BookingConfirmation>,
    last_failure: Option<SubmissionError>,
    dates: DateSource,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Contact,
            form: BookingForm::new(),
            errors: ErrorMap::new(),
            submitting: false,
            success: false,
            confirmation: None,
            last_failure: None,
            dates: DateSource::System,
        }
    }

    /// Pin "today" to a fixed date
    pub fn with_date_source(mut self, dates: DateSource) -> Self {
        self.dates = dates;
        self
    }

    /// Start from pre-filled values, still on the first step
    pub fn with_form(mut self, form: BookingForm) -> Self {
        self.form = form;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    /// Error from the most recent failed submission, cleared on the next attempt
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.dates.today()
    }

    /// Store a value and drop any message for that field
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        if self.errors.remove(field) {
            debug!(field = %field, "Cleared field error on edit");
        }
    }

    /// Validate the current step without changing state
    pub fn validate_current(&self) -> ErrorMap {
        validation::validate_step(self.step, &self.form, self.today())
    }

    /// Move forward if the current step is valid, saturating on the last step.
    /// Returns whether the step passed validation.
    pub fn advance(&mut self) -> bool {
        let errors = self.validate_current();
        if !errors.is_empty() {
            debug!(step = ?self.step, invalid = errors.len(), "Advance blocked by validation");
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        let next = self.step.next();
        if next != self.step {
            debug!(from = ?self.step, to = ?next, "Wizard advanced");
            self.step = next;
        }
        true
    }

    /// Move back one step. Never validates; a no-op on the first step.
    pub fn retreat(&mut self) {
        self.errors.clear();
        let previous = self.step.previous();
        if previous != self.step {
            debug!(from = ?self.step, to = ?previous, "Wizard retreated");
            self.step = previous;
        }
    }

    /// Validate the final step and mark the wizard as submitting.
    ///
    /// On success the returned request is what should be handed to a
    /// [`Submitter`]; report its result through [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<BookingRequest, SubmitBlocked> {
        if self.success {
            return Err(SubmitBlocked::AlreadyConfirmed);
        }
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if !self.step.is_last() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }

        // Earlier steps can go invalid if edited after advancing; land on the
        // first one that did so its fields show the messages.
        let today = self.today();
        for step in Step::ALL {
            let errors = validation::validate_step(step, &self.form, today);
            if !errors.is_empty() {
                debug!(step = ?step, invalid = errors.len(), "Submit blocked by validation");
                self.step = step;
                self.errors = errors;
                return Err(SubmitBlocked::Invalid);
            }
        }

        let request = BookingRequest::from_form(&self.form, today).map_err(|errors| {
            self.errors = errors;
            SubmitBlocked::Invalid
        })?;

        self.errors.clear();
        self.last_failure = None;
        self.submitting = true;
        Ok(request)
    }

    /// Record the submitter's answer. Ignored unless a submission is in flight.
    pub fn finish_submit(
        &mut self,
        result: Result<BookingConfirmation, SubmissionError>,
    ) -> SubmitOutcome {
        if !self.submitting {
            debug!("Discarding submission result for a wizard that is not submitting");
            return SubmitOutcome::Discarded;
        }

        self.submitting = false;
        match result {
            Ok(confirmation) => {
                self.success = true;
                self.confirmation = Some(confirmation.clone());
                SubmitOutcome::Confirmed(confirmation)
            }
            Err(error) => {
                warn!(error = %error, "Booking submission failed");
                self.last_failure = Some(error.clone());
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Validate, submit and wait for the answer. The wait cannot be cancelled.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome
    where
        S: Submitter + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        debug!(submitter = submitter.name(), "Submitting booking");
        let result = submitter.submit(&request).await;
        self.finish_submit(result)
    }

    /// Back to the initial state with an empty form
    pub fn reset(&mut self) {
        let dates = self.dates;
        *self = Self::new().with_date_source(dates);
    }
}
