//! pdfcipher - batch PDF encryption and decryption
//!
//! This library provides the functionality behind the `pdfcipher` command.
//! Encryption itself is delegated to `qpdf`; this crate collects the target
//! files, asks for the password and drives `qpdf` over each file, asking
//! again whenever a password is rejected.
//!
//! # Architecture
//!
//! - `config`: Config directory and user settings
//! - `error`: Custom error types
//! - `files`: Target file collection
//! - `password`: Password prompts and zeroizing password storage
//! - `tool`: The `PdfTool` trait and the qpdf invoker
//! - `services`: Batch runner with the retry-on-bad-password loop
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pdfcipher::config::{PdfCipherPaths, Settings};
//! use pdfcipher::password::TerminalPrompt;
//! use pdfcipher::services::Action;
//! use pdfcipher::tool::Qpdf;
//!
//! let settings = Settings::load_or_default(&PdfCipherPaths::new()?)?;
//! let report = pdfcipher::cli::run_batch(
//!     Action::Decrypt,
//!     &settings,
//!     &["statements/".into()],
//!     Qpdf::from_settings(&settings),
//!     TerminalPrompt,
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod password;
pub mod services;
pub mod tool;

pub use error::{PdfCipherError, PdfCipherResult};
