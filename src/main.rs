use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jumpzone::{
    cli::commands::{
        book::BookCommand, packages::PackagesCommand, submit::SubmitCommand,
        validate::ValidateCommand, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    config::ConfigLoader,
    io::paths::JumpzonePaths,
};

/// Environment variable that overrides `--log-level`
const LOG_ENV: &str = "JUMPZONE_LOG";

/// Initialize tracing from the CLI flag or `JUMPZONE_LOG`.
///
/// Non-interactive commands log to stderr so stdout stays parseable. The
/// interactive wizard owns the terminal, so it logs to a file instead.
fn initialize_tracing(log_level: LogLevel, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_directive()));

    if interactive {
        let paths = JumpzonePaths::default();
        paths.ensure_directories()?;
        let log_path = paths.log_file();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr) // logs to stderr, not stdout
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level, cli.command.is_interactive())?;

    let (config, source) = ConfigLoader::new().discover(cli.config.as_deref())?;
    debug!(?source, command = cli.command.name(), "Loaded site configuration");

    let command: Box<dyn CommandHandler + Send + Sync> = match cli.command {
        Commands::Book => Box::new(BookCommand::new(config)),
        Commands::Validate { file, step, format } => {
            Box::new(ValidateCommand::new(file, step, format))
        }
        Commands::Submit { file, format } => Box::new(SubmitCommand::new(file, format, &config)),
        Commands::Packages { format } => Box::new(PackagesCommand::new(format, config)),
    };

    command.execute().await?;
    Ok(())
}
