//! Service layer for pdfcipher
//!
//! The service layer holds the batch logic on top of the external tool and
//! the password prompt, independent of how results are presented.

pub mod cipher;

pub use cipher::{Action, BatchReport, CipherOptions, CipherService, FileOutcome, SkipReason};
