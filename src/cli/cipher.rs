//! Encrypt/decrypt CLI commands
//!
//! Collects the target files, asks for the password and runs the batch,
//! printing one progress line per file.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::PdfCipherResult;
use crate::files::collect_pdf_files;
use crate::password::{read_new_password, read_password, PasswordPrompt, TerminalPrompt};
use crate::services::{Action, BatchReport, CipherOptions, CipherService, FileOutcome};
use crate::tool::{PdfTool, Qpdf};

/// Files and directories to process
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// PDF files, or directories to search recursively for PDF files
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Handle `enc` / `dec` with qpdf and the terminal prompt
pub fn handle_cipher_command(
    action: Action,
    settings: &Settings,
    args: &TargetArgs,
) -> PdfCipherResult<BatchReport> {
    run_batch(
        action,
        settings,
        &args.paths,
        Qpdf::from_settings(settings),
        TerminalPrompt,
    )
}

/// Run one action over `inputs` with the given tool and prompt
///
/// Paths are resolved before the password is requested, so an invalid path
/// fails without prompting.
pub fn run_batch<T: PdfTool, P: PasswordPrompt>(
    action: Action,
    settings: &Settings,
    inputs: &[PathBuf],
    tool: T,
    mut prompt: P,
) -> PdfCipherResult<BatchReport> {
    let files = collect_pdf_files(inputs)?;
    if files.is_empty() {
        println!("No PDF files found.");
        return Ok(BatchReport::default());
    }

    let password = match action {
        Action::Encrypt => read_new_password(&mut prompt)?,
        Action::Decrypt => read_password(&mut prompt)?,
    };

    let options = CipherOptions::from(settings);
    let mut service = CipherService::new(tool, prompt, action, password, options);
    let report = service.run(&files, print_progress, print_outcome)?;

    tracing::info!(
        processed = report.processed,
        skipped = report.skipped,
        "Finished {} batch",
        action
    );
    Ok(report)
}

fn progress_line(action: Action, path: &Path) -> String {
    format!("[{}] {}", action.label(), path.display())
}

fn outcome_line(path: &Path, outcome: &FileOutcome) -> Option<String> {
    match outcome {
        FileOutcome::Skipped(reason) => Some(format!("[SKIP] {} ({})", path.display(), reason)),
        FileOutcome::Processed { .. } => None,
    }
}

fn print_progress(action: Action, path: &Path) {
    println!("{}", progress_line(action, path));
}

fn print_outcome(path: &Path, outcome: &FileOutcome) {
    if let Some(line) = outcome_line(path, outcome) {
        println!("{}", line);
    }
}
