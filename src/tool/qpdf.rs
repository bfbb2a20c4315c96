//! qpdf command-line invoker
//!
//! Runs `qpdf` once per operation and maps its exit status:
//!
//! | exit code | meaning                                        |
//! |-----------|------------------------------------------------|
//! | 0         | success (or "encrypted" for `--is-encrypted`)  |
//! | 2         | invalid password (or "not encrypted")          |
//! | other     | fatal tool failure                             |
//!
//! Output is written to a hidden sibling of the destination and renamed
//! over it on success, so a file can be rewritten in place. A symlinked
//! destination is resolved first so the file it points to is replaced.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::PdfTool;
use crate::config::{KeyLength, Settings};
use crate::error::{PdfCipherError, PdfCipherResult};
use crate::password::Password;

const EXIT_INVALID_PASSWORD: i32 = 2;
const EXIT_NOT_ENCRYPTED: i32 = 2;

/// The qpdf executable together with the encryption options to pass it
#[derive(Debug, Clone)]
pub struct Qpdf {
    program: PathBuf,
    key_length: KeyLength,
}

impl Qpdf {
    pub fn new(program: impl Into<PathBuf>, key_length: KeyLength) -> Self {
        Self {
            program: program.into(),
            key_length,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.qpdf_program(), settings.key_length)
    }

    #[cfg(test)]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn status(&self, args: &[OsString], quiet: bool) -> PdfCipherResult<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        if quiet {
            cmd.stdout(Stdio::null());
        }

        cmd.status().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PdfCipherError::ToolNotFound(self.program_name())
            } else {
                PdfCipherError::Io(format!("Failed to run {}: {}", self.program_name(), e))
            }
        })
    }

    fn check(&self, status: ExitStatus) -> PdfCipherResult<()> {
        match status.code() {
            Some(0) => Ok(()),
            Some(EXIT_INVALID_PASSWORD) => Err(PdfCipherError::InvalidPassword),
            code => Err(PdfCipherError::ToolFailed {
                program: self.program_name(),
                code,
            }),
        }
    }

    /// Run qpdf with `args`, then `input` and a temporary output, and move
    /// the result to `output`
    fn rewrite(&self, input: &Path, output: &Path, mut args: Vec<OsString>) -> PdfCipherResult<()> {
        let target = resolve_target(output);
        let temp = temp_path_for(&target)?;
        args.push(input.into());
        args.push(temp.clone().into());

        let result = self
            .status(&args, false)
            .and_then(|status| self.check(status))
            .and_then(|()| replace_output(input, &temp, &target));

        if result.is_err() && temp.exists() {
            if let Err(e) = fs::remove_file(&temp) {
                tracing::warn!(
                    path = %temp.display(),
                    error = %e,
                    "Failed to remove temporary file"
                );
            }
        }

        result
    }
}

impl PdfTool for Qpdf {
    fn is_encrypted(&self, path: &Path) -> PdfCipherResult<bool> {
        tracing::debug!(
            program = %self.program.display(),
            file = %path.display(),
            "qpdf --is-encrypted"
        );

        let args = [
            OsString::from("--is-encrypted"),
            path.as_os_str().to_os_string(),
        ];
        let status = self.status(&args, true)?;
        match status.code() {
            Some(0) => Ok(true),
            Some(EXIT_NOT_ENCRYPTED) => Ok(false),
            code => Err(PdfCipherError::ToolFailed {
                program: self.program_name(),
                code,
            }),
        }
    }

    fn encrypt(&self, input: &Path, output: &Path, password: &Password) -> PdfCipherResult<()> {
        tracing::debug!(
            program = %self.program.display(),
            file = %input.display(),
            bits = self.key_length.bits(),
            "qpdf --encrypt"
        );

        // Same user and owner password
        let args = vec![
            "--encrypt".into(),
            password.as_str().into(),
            password.as_str().into(),
            self.key_length.to_string().into(),
            "--".into(),
        ];
        self.rewrite(input, output, args)
    }

    fn decrypt(&self, input: &Path, output: &Path, password: &Password) -> PdfCipherResult<()> {
        tracing::debug!(
            program = %self.program.display(),
            file = %input.display(),
            "qpdf --decrypt"
        );

        let args = vec![
            "--decrypt".into(),
            format!("--password={}", password.as_str()).into(),
        ];
        self.rewrite(input, output, args)
    }
}

/// The file actually replaced: symlinks resolved, or `output` itself when it
/// does not exist yet
fn resolve_target(output: &Path) -> PathBuf {
    fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf())
}

fn temp_path_for(output: &Path) -> PdfCipherResult<PathBuf> {
    let name = output
        .file_name()
        .ok_or_else(|| PdfCipherError::invalid_path(output, "no file name"))?;
    Ok(output.with_file_name(format!(".{}.pdfcipher-tmp", name.to_string_lossy())))
}

/// Give the new file the input's permissions and move it into place
fn replace_output(input: &Path, temp: &Path, output: &Path) -> PdfCipherResult<()> {
    if let Ok(metadata) = fs::metadata(input) {
        fs::set_permissions(temp, metadata.permissions())
            .map_err(|e| PdfCipherError::Io(format!("Failed to set permissions: {}", e)))?;
    }

    fs::rename(temp, output).map_err(|e| {
        PdfCipherError::Io(format!("Failed to replace {}: {}", output.display(), e))
    })
}
