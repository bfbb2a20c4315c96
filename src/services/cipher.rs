//! Batch encryption/decryption service
//!
//! Runs the PDF tool over a list of files one at a time, re-prompting for
//! the password whenever the tool rejects it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{PdfCipherError, PdfCipherResult};
use crate::password::{Password, PasswordPrompt};
use crate::tool::PdfTool;

/// What to do with each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encrypt,
    Decrypt,
}

impl Action {
    /// Progress label printed before each file
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "ENCRYPT",
            Self::Decrypt => "DECRYPT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Why a file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyEncrypted,
    NotEncrypted,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyEncrypted => write!(f, "already encrypted"),
            Self::NotEncrypted => write!(f, "not encrypted"),
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was rewritten; `attempts` counts tool runs including the
    /// successful one
    Processed { attempts: u32 },
    Skipped(SkipReason),
}

/// Totals for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

/// Options for the batch runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherOptions {
    /// Failed password attempts allowed per file; `None` retries forever
    pub max_password_attempts: Option<u32>,
    /// Skip files already in the target state
    pub skip_processed: bool,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            max_password_attempts: None,
            skip_processed: true,
        }
    }
}

impl From<&Settings> for CipherOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            max_password_attempts: settings.max_password_attempts,
            skip_processed: settings.skip_processed,
        }
    }
}

/// Service that applies one action to a batch of files
pub struct CipherService<T, P> {
    tool: T,
    prompt: P,
    action: Action,
    password: Password,
    options: CipherOptions,
}

impl<T: PdfTool, P: PasswordPrompt> CipherService<T, P> {
    /// Create a new service with the password entered up front
    pub fn new(
        tool: T,
        prompt: P,
        action: Action,
        password: Password,
        options: CipherOptions,
    ) -> Self {
        Self {
            tool,
            prompt,
            action,
            password,
            options,
        }
    }

    /// Whether a file is already in the state this action produces
    pub fn skip_reason(&self, path: &Path) -> PdfCipherResult<Option<SkipReason>> {
        if !self.options.skip_processed {
            return Ok(None);
        }

        let encrypted = self.tool.is_encrypted(path)?;
        Ok(match (self.action, encrypted) {
            (Action::Encrypt, true) => Some(SkipReason::AlreadyEncrypted),
            (Action::Decrypt, false) => Some(SkipReason::NotEncrypted),
            _ => None,
        })
    }

    /// Encrypt or decrypt one file in place
    ///
    /// A rejected password triggers a new prompt and another attempt on the
    /// same file. The replacement password is only used for this file.
    pub fn process_file(&mut self, path: &Path) -> PdfCipherResult<FileOutcome> {
        if let Some(reason) = self.skip_reason(path)? {
            tracing::info!(file = %path.display(), %reason, "Skipping file");
            return Ok(FileOutcome::Skipped(reason));
        }

        let mut retry_password: Option<Password> = None;
        let mut failures = 0u32;

        loop {
            let password = retry_password.as_ref().unwrap_or(&self.password);
            let result = match self.action {
                Action::Encrypt => self.tool.encrypt(path, path, password),
                Action::Decrypt => self.tool.decrypt(path, path, password),
            };

            match result {
                Ok(()) => {
                    return Ok(FileOutcome::Processed {
                        attempts: failures + 1,
                    })
                }
                Err(PdfCipherError::InvalidPassword) => {
                    failures += 1;
                    tracing::warn!(file = %path.display(), failures, "Invalid password");

                    if self.options.max_password_attempts.is_some_and(|max| failures >= max) {
                        return Err(PdfCipherError::TooManyAttempts {
                            path: path.to_path_buf(),
                            attempts: failures,
                        });
                    }

                    let message = format!("Invalid password for {}. Password: ", path.display());
                    retry_password = Some(self.prompt.prompt(&message)?);
                }
                Err(e) => {
                    tracing::error!(
                        file = %path.display(),
                        error = %e,
                        "Failed to {} file",
                        self.action
                    );
                    return Err(e);
                }
            }
        }
    }

    /// Process every file in order, stopping at the first fatal error
    ///
    /// `on_file` is called before each file and `on_outcome` after it.
    pub fn run<F, G>(
        &mut self,
        files: &[PathBuf],
        mut on_file: F,
        mut on_outcome: G,
    ) -> PdfCipherResult<BatchReport>
    where
        F: FnMut(Action, &Path),
        G: FnMut(&Path, &FileOutcome),
    {
        let mut report = BatchReport::default();

        for path in files {
            on_file(self.action, path.as_path());
            let outcome = self.process_file(path)?;
            match outcome {
                FileOutcome::Processed { .. } => report.processed += 1,
                FileOutcome::Skipped(_) => report.skipped += 1,
            }
            on_outcome(path.as_path(), &outcome);
        }

        Ok(report)
    }
}
