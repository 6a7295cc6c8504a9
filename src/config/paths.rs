//! Path management for Wealth Architect
//!
//! Provides XDG-compliant path resolution for configuration, logs, and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `WEALTH_ARCHITECT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wealth-architect` or `~/.config/wealth-architect`
//! 3. Windows: `%APPDATA%\wealth-architect`

use std::path::PathBuf;

use crate::error::WealthError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WEALTH_ARCHITECT_DATA_DIR";

/// Manages all paths used by Wealth Architect
#[derive(Debug, Clone)]
pub struct WealthPaths {
    /// Base directory for all Wealth Architect files
    base_dir: PathBuf,
}

impl WealthPaths {
    /// Create a new WealthPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WealthError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WealthPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/wealth-architect/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding rotated log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the default directory for exported projections
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WealthError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WealthError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| WealthError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written at least once
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WealthError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| WealthError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("wealth-architect"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WealthError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WealthError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wealth-architect"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.log_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_settings_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
