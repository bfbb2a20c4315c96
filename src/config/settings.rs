//! User settings for pdfcipher
//!
//! Manages the qpdf location, the encryption key length and the retry policy.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::PdfCipherPaths;
use crate::error::PdfCipherError;

/// AES key length passed to `qpdf --encrypt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
pub enum KeyLength {
    /// AES-128
    #[serde(rename = "128")]
    #[value(name = "128")]
    Aes128,
    /// AES-256 (default)
    #[default]
    #[serde(rename = "256")]
    #[value(name = "256")]
    Aes256,
}

impl KeyLength {
    /// Number of bits as qpdf expects it on the command line
    pub fn bits(self) -> u16 {
        match self {
            Self::Aes128 => 128,
            Self::Aes256 => 256,
        }
    }
}

impl fmt::Display for KeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// User settings for pdfcipher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Location of the qpdf executable; looked up on PATH when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qpdf_path: Option<PathBuf>,

    /// Key length for newly encrypted files
    #[serde(default)]
    pub key_length: KeyLength,

    /// Failed password attempts allowed per file (unlimited when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_password_attempts: Option<u32>,

    /// Skip files that are already encrypted (on encrypt) or plain (on decrypt)
    #[serde(default = "default_skip_processed")]
    pub skip_processed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_skip_processed() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            qpdf_path: None,
            key_length: KeyLength::default(),
            max_password_attempts: None,
            skip_processed: default_skip_processed(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &PdfCipherPaths) -> Result<Self, PdfCipherError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PdfCipherError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PdfCipherError::Config(format!(
                "Failed to parse {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        if settings.max_password_attempts == Some(0) {
            return Err(PdfCipherError::Config(
                "max_password_attempts must be at least 1".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PdfCipherPaths) -> Result<(), PdfCipherError> {
        std::fs::create_dir_all(paths.config_dir())
            .map_err(|e| PdfCipherError::Io(format!("Failed to create config directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PdfCipherError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PdfCipherError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The qpdf program to run
    pub fn qpdf_program(&self) -> PathBuf {
        self.qpdf_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("qpdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.key_length, KeyLength::Aes256);
        assert_eq!(settings.max_password_attempts, None);
        assert!(settings.skip_processed);
        assert_eq!(settings.qpdf_program(), PathBuf::from("qpdf"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().join("absent"));

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.key_length, KeyLength::Aes256);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            qpdf_path: Some(PathBuf::from("/opt/qpdf/bin/qpdf")),
            key_length: KeyLength::Aes128,
            max_password_attempts: Some(3),
            skip_processed: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.qpdf_program(), PathBuf::from("/opt/qpdf/bin/qpdf"));
        assert_eq!(loaded.key_length, KeyLength::Aes128);
        assert_eq!(loaded.max_password_attempts, Some(3));
        assert!(!loaded.skip_processed);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"key_length": "128", "extra": 1}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.key_length, KeyLength::Aes128);
        assert!(loaded.skip_processed);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, PdfCipherError::Config(_)));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"max_password_attempts": 0}"#).unwrap();

        assert!(Settings::load_or_default(&paths).is_err());
    }

    #[test]
    fn test_key_length_bits() {
        assert_eq!(KeyLength::Aes128.bits(), 128);
        assert_eq!(KeyLength::Aes256.to_string(), "256");
    }
}
