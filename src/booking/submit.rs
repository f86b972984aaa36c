//! Submission seam between the wizard and whatever takes the booking

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::request::{BookingConfirmation, BookingRequest};
use crate::SubmissionError;

/// Default artificial latency of [`SimulatedSubmitter`]
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Anything that can accept a validated booking.
///
/// Implementations report failure through [`SubmissionError`]; retry policy
/// belongs to the caller.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &BookingRequest)
        -> Result<BookingConfirmation, SubmissionError>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Waits a fixed delay and confirms every booking. No network I/O happens.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, SubmissionError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating booking submission");
        tokio::time::sleep(self.delay).await;

        let confirmation = BookingConfirmation::new(request.clone());
        info!(
            reference = %confirmation.reference,
            package = %request.package,
            party_date = %request.party_date,
            "Booking confirmed"
        );
        Ok(confirmation)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Bounds another submitter with a deadline, mapping expiry to [`SubmissionError::Timeout`].
pub struct TimeoutSubmitter<S> {
    inner: S,
    timeout: Duration,
}

impl<S: Submitter> TimeoutSubmitter<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: Submitter> Submitter for TimeoutSubmitter<S> {
    async fn submit(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, SubmissionError> {
        match tokio::time::timeout(self.timeout, self.inner.submit(request)).await {
            Ok(result) => result,
            Err(_) => Err(SubmissionError::Timeout(self.timeout)),
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
