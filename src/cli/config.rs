//! `config` command: show where settings live and what is in effect

use crate::config::{PdfCipherPaths, Settings};
use crate::error::PdfCipherResult;

/// Print the configuration, optionally writing a default settings file first
pub fn handle_config_command(
    paths: &PdfCipherPaths,
    settings: &Settings,
    init: bool,
) -> PdfCipherResult<()> {
    let settings_file = paths.settings_file();

    if init {
        if settings_file.exists() {
            println!("Settings file already exists: {}", settings_file.display());
        } else {
            Settings::default().save(paths)?;
            println!("Created {}", settings_file.display());
        }
        println!();
    }

    println!("pdfcipher Configuration");
    println!("=======================");
    println!("Config directory: {}", paths.config_dir().display());
    let note = if settings_file.exists() {
        ""
    } else {
        " (not present, using defaults)"
    };
    println!("Settings file:    {}{}", settings_file.display(), note);
    println!();
    println!("Settings:");
    println!("  qpdf:                  {}", settings.qpdf_program().display());
    println!("  Key length:            {} bits", settings.key_length);
    println!(
        "  Max password attempts: {}",
        settings
            .max_password_attempts
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string())
    );
    println!("  Skip processed files:  {}", settings.skip_processed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_settings() {
        let temp = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp.path().join("pdfcipher"));

        handle_config_command(&paths, &Settings::default(), true).unwrap();

        assert!(paths.settings_file().exists());
        let loaded = Settings::load_or_default(&paths).unwrap();
        assert!(loaded.skip_processed);
    }

    #[test]
    fn test_show_does_not_create_file() {
        let temp = TempDir::new().unwrap();
        let paths = PdfCipherPaths::with_config_dir(temp.path().to_path_buf());

        handle_config_command(&paths, &Settings::default(), false).unwrap();
        assert!(!paths.settings_file().exists());
    }
}
