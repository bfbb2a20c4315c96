//! Configuration module for pdfcipher
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PdfCipherPaths;
pub use settings::{KeyLength, Settings};
