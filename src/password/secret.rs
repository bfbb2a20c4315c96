//! Secure memory handling for passwords
//!
//! Provides a password type that zeroes its memory on drop and never
//! prints its contents.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password that zeroes its contents on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    inner: String,
}

impl Password {
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Password {}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_creation() {
        let p = Password::new("test");
        assert_eq!(p.as_str(), "test");
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn test_password_equality() {
        assert_eq!(Password::from("abc"), Password::from(String::from("abc")));
        assert_ne!(Password::from("abc"), Password::from("abd"));
    }

    #[test]
    fn test_password_debug_redacted() {
        let p = Password::new("secret");
        let debug = format!("{:?}", p);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("Password"));
    }

    #[test]
    fn test_password_display_redacted() {
        let p = Password::new("secret");
        let display = format!("{}", p);
        assert!(!display.contains("secret"));
        assert!(display.contains("REDACTED"));
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut p = Password::new("secret");
        p.zeroize();
        assert!(p.is_empty());
    }
}
