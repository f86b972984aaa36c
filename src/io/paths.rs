use crate::{JumpzoneError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the site configuration
pub const CONFIG_FILE_NAME: &str = "jumpzone.yaml";

/// File name of the interactive wizard's log
pub const LOG_FILE_NAME: &str = "jumpzone.log";

/// Path management for jumpzone configuration and log files
#[derive(Debug, Clone)]
pub struct JumpzonePaths {
    /// Configuration directory
    pub config_dir: PathBuf,
    /// Cache directory, also home of the wizard log
    pub cache_dir: PathBuf,
}

impl JumpzonePaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "jumpzone").ok_or_else(|| {
            JumpzoneError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            cache_dir: dirs.cache_dir().to_path_buf(),
        })
    }

    /// Create paths rooted in a specific directory
    pub fn for_project(project_root: &Path) -> Self {
        let config_dir = project_root.join(".jumpzone");
        let cache_dir = config_dir.join("cache");
        Self {
            config_dir,
            cache_dir,
        }
    }

    /// Platform-wide site configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Log file used while the terminal UI owns stdout/stderr
    pub fn log_file(&self) -> PathBuf {
        self.cache_dir.join(LOG_FILE_NAME)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.cache_dir)?;
        Ok(())
    }
}

impl Default for JumpzonePaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if platform directories fail
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::for_project(&current_dir)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        let project_root = Path::new("/tmp/test-project");
        let paths = JumpzonePaths::for_project(project_root);

        assert_eq!(paths.config_dir, project_root.join(".jumpzone"));
        assert_eq!(paths.cache_dir, project_root.join(".jumpzone/cache"));
        assert_eq!(
            paths.config_file(),
            project_root.join(".jumpzone/jumpzone.yaml")
        );
        assert_eq!(
            paths.log_file(),
            project_root.join(".jumpzone/cache/jumpzone.log")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp = tempfile::tempdir().unwrap();
        let paths = JumpzonePaths::for_project(temp.path());
        paths.ensure_directories().unwrap();
        assert!(paths.cache_dir.is_dir());
    }
}
