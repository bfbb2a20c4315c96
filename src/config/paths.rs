//! Path management for pdfcipher
//!
//! ## Path Resolution Order
//!
//! 1. `PDFCIPHER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `pdfcipher`
//!    (`~/.config/pdfcipher` on Linux, `%APPDATA%\pdfcipher` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PdfCipherError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PDFCIPHER_CONFIG_DIR";

/// Manages the paths used by pdfcipher
#[derive(Debug, Clone)]
pub struct PdfCipherPaths {
    config_dir: PathBuf,
}

impl PdfCipherPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `PDFCIPHER_CONFIG_DIR` is unset.
    pub fn new() -> Result<Self, PdfCipherError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { config_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, PdfCipherError> {
    let base = BaseDirs::new()
        .ok_or_else(|| PdfCipherError::Config("Could not determine home directory".into()))?;
    Ok(base.config_dir().join("pdfcipher"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = PdfCipherPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.config_dir(), temp_dir.path());
    }
}
