//! External PDF tool integration
//!
//! The actual PDF encryption is delegated to an external program. The
//! `PdfTool` trait is the seam between the batch runner and that program;
//! `Qpdf` is the production implementation.

pub mod qpdf;

use std::path::Path;

use crate::error::PdfCipherResult;
use crate::password::Password;

pub use qpdf::Qpdf;

/// Operations the batch runner needs from a PDF tool
///
/// `input` and `output` may be the same path.
pub trait PdfTool {
    /// Check whether a file is password protected
    fn is_encrypted(&self, path: &Path) -> PdfCipherResult<bool>;

    /// Write an encrypted copy of `input` to `output`
    ///
    /// Returns `InvalidPassword` when the tool reports exit code 2.
    fn encrypt(&self, input: &Path, output: &Path, password: &Password) -> PdfCipherResult<()>;

    /// Write a decrypted copy of `input` to `output`
    ///
    /// Returns `InvalidPassword` when the tool reports exit code 2.
    fn decrypt(&self, input: &Path, output: &Path, password: &Password) -> PdfCipherResult<()>;
}
