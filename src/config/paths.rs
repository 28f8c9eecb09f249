//! Path management for finance-dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_DASHBOARD_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/finance-dashboard` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "FINANCE_DASHBOARD_DIR";

/// Manages all paths used by finance-dashboard
#[derive(Debug, Clone)]
pub struct FinancePaths {
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    ProjectDirs::from("", "", "finance-dashboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinanceError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("finance");
        let paths = FinancePaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
