//! Custom error types for pdfcipher
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for pdfcipher operations
#[derive(Error, Debug)]
pub enum PdfCipherError {
    /// Password and confirmation differ
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// A command-line path that cannot be processed
    #[error("Invalid path '{}': {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// The external tool rejected the password (qpdf exit code 2)
    #[error("Invalid password")]
    InvalidPassword,

    /// Password retries exhausted for a file
    #[error("Giving up on '{}' after {attempts} failed password attempts", .path.display())]
    TooManyAttempts { path: PathBuf, attempts: u32 },

    /// The external tool could not be started
    #[error("{0} not found; install qpdf or set its location with --qpdf")]
    ToolNotFound(String),

    /// The external tool failed with a non-retryable status
    #[error("{program} returned non-zero exit code {}", exit_code_text(.code))]
    ToolFailed { program: String, code: Option<i32> },

    /// Reading a password from the terminal failed
    #[error("Failed to read password: {0}")]
    Prompt(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

fn exit_code_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "(terminated by signal)".to_string(), |c| c.to_string())
}

impl PdfCipherError {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the failure can be retried with another password
    pub fn is_invalid_password(&self) -> bool {
        matches!(self, Self::InvalidPassword)
    }
}

impl From<std::io::Error> for PdfCipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PdfCipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for pdfcipher operations
pub type PdfCipherResult<T> = Result<T, PdfCipherError>;
