//! Open/close lifecycle of the booking modal
//!
//! The hosting screen only flips the open flag. Closing schedules a full
//! wizard reset after `reset_delay` so the close transition can finish with
//! the old content still visible.

use std::time::{Duration, Instant};
use tracing::debug;

use super::wizard::BookingWizard;

/// Default pause between closing the modal and clearing the wizard
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
pub struct BookingModal {
    open: bool,
    wizard: BookingWizard,
    reset_delay: Duration,
    reset_at: Option<Instant>,
}

impl Default for BookingModal {
    fn default() -> Self {
        Self::new(BookingWizard::new(), DEFAULT_RESET_DELAY)
    }
}

impl BookingModal {
    pub fn new(wizard: BookingWizard, reset_delay: Duration) -> Self {
        Self {
            open: false,
            wizard,
            reset_delay,
            reset_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut BookingWizard {
        &mut self.wizard
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Show the modal. A reset still waiting from the last close happens now,
    /// unless a submission is still out, in which case the reset is dropped.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        if self.reset_at.take().is_some() {
            if self.wizard.is_submitting() {
                debug!("Reopened during submission, keeping the in-flight booking");
            } else {
                debug!("Applying pending wizard reset on reopen");
                self.wizard.reset();
            }
        }
        self.open = true;
    }

    /// Hide the modal and schedule the wizard reset
    pub fn close(&mut self, now: Instant) {
        if !self.open {
            return;
        }
        self.open = false;
        self.reset_at = Some(now + self.reset_delay);
        debug!(delay_ms = self.reset_delay.as_millis() as u64, "Booking modal closed");
    }

    /// Apply the scheduled reset once it is due and no submission is in
    /// flight. Returns whether it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.wizard.is_submitting() {
            return false;
        }
        match self.reset_at {
            Some(due) if now >= due => {
                self.reset_at = None;
                self.wizard.reset();
                debug!("Booking wizard reset after close");
                true
            }
            _ => false,
        }
    }
}
