//! File selection for batch operations

pub mod collector;

pub use collector::{collect_pdf_files, is_pdf};
