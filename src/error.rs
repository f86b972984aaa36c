use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumpzoneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CLI error: {0}")]
    Cli(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

/// Failure reported by a [`Submitter`](crate::booking::Submitter).
///
/// The wizard never retries; the caller decides what to do with these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("booking rejected: {0}")]
    Rejected(String),

    #[error("booking request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, JumpzoneError>;
