pub mod book;
pub mod packages;
pub mod submit;
pub mod validate;

use async_trait::async_trait;
use std::path::Path;

use crate::booking::{BookingForm, ErrorMap};
use crate::{JumpzoneError, Result};

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Read a booking form from a `.json`, `.yaml` or `.yml` file
pub fn load_form(path: &Path) -> Result<BookingForm> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        JumpzoneError::Cli(format!("Failed to read booking file {}: {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let form = if is_json {
        serde_json::from_str(&contents)?
    } else {
        serde_yaml_ng::from_str(&contents)?
    };
    Ok(form)
}

/// Indented `field: message` lines for text output
pub fn format_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("    {}: {}", field, message))
        .collect::<Vec<_>>()
        .join("\n")
}
