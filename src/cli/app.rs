use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// JumpZone: birthday-party booking for an indoor trampoline park
#[derive(Parser)]
#[command(name = "jumpzone")]
#[command(version = "0.1.0")]
#[command(about = "Birthday-party booking for an indoor trampoline park")]
#[command(
    long_about = "JumpZone walks a parent through a three-step party booking (contact, party details, date and time), validating each step before moving on."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site configuration file (defaults to ./jumpzone.yaml, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overridden by JUMPZONE_LOG)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive booking wizard
    Book,

    /// Validate a booking form file step by step
    Validate {
        /// JSON or YAML file with the form values
        file: PathBuf,

        /// Only validate this step (0 = contact, 1 = party, 2 = date & time)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
        step: Option<u8>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run a booking form file through the whole wizard and submit it
    Submit {
        /// JSON or YAML file with the form values
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List party packages and park locations
    Packages {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output formats for non-interactive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Book => "book",
            Commands::Validate { .. } => "validate",
            Commands::Submit { .. } => "submit",
            Commands::Packages { .. } => "packages",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Book)
    }
}
