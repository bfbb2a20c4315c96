//! Password handling for pdfcipher
//!
//! Passwords are read from the terminal and kept in a type that zeroes
//! its memory on drop.

pub mod prompt;
pub mod secret;

#[cfg(test)]
pub use prompt::ScriptedPrompt;
pub use prompt::{read_new_password, read_password, PasswordPrompt, TerminalPrompt};
pub use secret::Password;
