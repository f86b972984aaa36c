use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::SiteConfig;
use crate::io::paths::{JumpzonePaths, CONFIG_FILE_NAME};
use crate::{JumpzoneError, Result};

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Locates and loads `jumpzone.yaml`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    working_dir: PathBuf,
    paths: JumpzonePaths,
}

impl ConfigLoader {
    pub fn new() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            working_dir,
            paths: JumpzonePaths::default(),
        }
    }

    /// Loader with explicit search roots
    pub fn with_roots(working_dir: impl Into<PathBuf>, paths: JumpzonePaths) -> Self {
        Self {
            working_dir: working_dir.into(),
            paths,
        }
    }

    /// Find and load the configuration.
    ///
    /// Resolution order:
    /// 1. CLI override (must exist)
    /// 2. `jumpzone.yaml` in the working directory
    /// 3. Platform config directory
    /// 4. Built-in defaults
    pub fn discover(&self, cli_override: Option<&Path>) -> Result<(SiteConfig, ConfigSource)> {
        if let Some(path) = cli_override {
            if !path.exists() {
                return Err(JumpzoneError::Config(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            debug!("Using --config override: {}", path.display());
            return Ok((self.load_file(path)?, ConfigSource::File(path.to_path_buf())));
        }

        let candidates = [
            self.working_dir.join(CONFIG_FILE_NAME),
            self.paths.config_file(),
        ];
        for candidate in candidates {
            if candidate.is_file() {
                info!("Found site configuration at {}", candidate.display());
                return Ok((self.load_file(&candidate)?, ConfigSource::File(candidate)));
            }
        }

        debug!("No site configuration found, using defaults");
        Ok((SiteConfig::default(), ConfigSource::Defaults))
    }

    /// Load and validate a single file
    pub fn load_file(&self, path: &Path) -> Result<SiteConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            JumpzoneError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: SiteConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            JumpzoneError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        validate_config(&config)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.business.name.trim().is_empty() {
        return Err(JumpzoneError::Config(
            "business.name must not be empty".to_string(),
        ));
    }

    for (index, location) in config.locations.iter().enumerate() {
        if location.name.trim().is_empty() {
            return Err(JumpzoneError::Config(format!(
                "Location at index {} has empty name",
                index
            )));
        }
    }

    for link in &config.navigation {
        if !link.path.starts_with('/') {
            return Err(JumpzoneError::Config(format!(
                "Navigation link '{}' must have an absolute path (got '{}')",
                link.label, link.path
            )));
        }
    }

    Ok(())
}
