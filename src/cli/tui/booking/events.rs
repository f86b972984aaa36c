use ratatui::crossterm::event::KeyEvent;

use crate::booking::BookingConfirmation;
use crate::SubmissionError;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events - Submission
    SubmissionFinished {
        /// Which submission this answers; stale answers are dropped
        generation: u64,
        result: Result<BookingConfirmation, SubmissionError>,
    },

    // UI events
    Tick, // for the spinner and the delayed wizard reset
}
