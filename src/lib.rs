pub mod booking;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use error::{JumpzoneError, Result, SubmissionError};
