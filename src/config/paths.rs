//! Path management for daystep
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `DAYSTEP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/daystep` or `~/.config/daystep`
//! 3. Windows: `%APPDATA%\daystep`

use std::path::PathBuf;

use crate::error::DaystepError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DAYSTEP_DATA_DIR";

/// Manages all paths used by daystep
#[derive(Debug, Clone)]
pub struct DaystepPaths {
    /// Base directory for all daystep data
    base_dir: PathBuf,
}

impl DaystepPaths {
    /// Create a new DaystepPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DaystepError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DaystepPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/daystep/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/daystep/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to tokens.json
    pub fn tokens_file(&self) -> PathBuf {
        self.data_dir().join("tokens.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), DaystepError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DaystepError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DaystepError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DaystepError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                DaystepError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("daystep"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DaystepError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DaystepError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("daystep"))
}
