//! Path management for EconoMe
//!
//! Resolves where settings, profile data, and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `ECONOME_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/econome` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::EconomeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ECONOME_DATA_DIR";

/// Manages all paths used by EconoMe
#[derive(Debug, Clone)]
pub struct EconomePaths {
    base_dir: PathBuf,
}

impl EconomePaths {
    /// Create a new EconomePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform data directory
    /// cannot be determined.
    pub fn new() -> Result<Self, EconomeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EconomePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
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

    /// Get the path to profiles.json, the single persisted profile collection
    pub fn profiles_file(&self) -> PathBuf {
        self.data_dir().join("profiles.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EconomeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EconomeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EconomeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, EconomeError> {
    ProjectDirs::from("com", "econome", "econome")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| EconomeError::Config("Could not determine a data directory".into()))
}
