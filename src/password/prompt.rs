//! Interactive password prompts

use super::secret::Password;
use crate::error::{PdfCipherError, PdfCipherResult};

pub const PASSWORD_PROMPT: &str = "Password: ";
pub const CONFIRM_PROMPT: &str = "Re-enter the password for confirmation: ";

/// Source of passwords
pub trait PasswordPrompt {
    /// Ask for a password, displaying `message`
    fn prompt(&mut self, message: &str) -> PdfCipherResult<Password>;
}

/// Reads passwords from the terminal with echo disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&mut self, message: &str) -> PdfCipherResult<Password> {
        rpassword::prompt_password(message)
            .map(Password::from)
            .map_err(|e| PdfCipherError::Prompt(e.to_string()))
    }
}

/// Answers prompts from a fixed list, in order
///
/// Running out of answers is reported as a prompt failure.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<Password>,
    asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Password>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Messages shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

#[cfg(test)]
impl PasswordPrompt for ScriptedPrompt {
    fn prompt(&mut self, message: &str) -> PdfCipherResult<Password> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PdfCipherError::Prompt("no more input".into()))
    }
}

/// Ask for an existing password
pub fn read_password<P: PasswordPrompt + ?Sized>(prompt: &mut P) -> PdfCipherResult<Password> {
    prompt.prompt(PASSWORD_PROMPT)
}

/// Ask for a new password and its confirmation
///
/// # Errors
///
/// Returns `PasswordMismatch` when the two entries differ.
pub fn read_new_password<P: PasswordPrompt + ?Sized>(prompt: &mut P) -> PdfCipherResult<Password> {
    let password = prompt.prompt(PASSWORD_PROMPT)?;
    let confirmation = prompt.prompt(CONFIRM_PROMPT)?;

    if password != confirmation {
        return Err(PdfCipherError::PasswordMismatch);
    }

    Ok(password)
}
