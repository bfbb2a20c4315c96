//! Target file collection
//!
//! Expands the command-line paths into the list of files to process.
//! Directories are walked recursively and contribute their PDF files;
//! plain file arguments are taken as given.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PdfCipherError, PdfCipherResult};

/// Check whether a path has a `.pdf` extension (any case)
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Resolve files and directories into an ordered, duplicate-free file list
///
/// # Errors
///
/// Returns `InvalidPath` for a path that does not exist, cannot be read,
/// or is neither a regular file nor a directory.
pub fn collect_pdf_files<P: AsRef<Path>>(inputs: &[P]) -> PdfCipherResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let metadata =
            std::fs::metadata(input).map_err(|e| PdfCipherError::invalid_path(input, e))?;

        if metadata.is_file() {
            push_unique(&mut files, &mut seen, input.to_path_buf());
        } else if metadata.is_dir() {
            let before = files.len();
            for path in walk_pdf_files(input)? {
                push_unique(&mut files, &mut seen, path);
            }
            tracing::debug!(
                dir = %input.display(),
                found = files.len() - before,
                "Collected PDF files from directory"
            );
        } else {
            return Err(PdfCipherError::invalid_path(
                input,
                "not a regular file or directory",
            ));
        }
    }

    tracing::info!(count = files.len(), "Collected target files");
    Ok(files)
}

fn walk_pdf_files(dir: &Path) -> PdfCipherResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            PdfCipherError::invalid_path(path, e)
        })?;

        if entry.file_type().is_file() && is_pdf(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Keep the first spelling of each file; `a.pdf`, `./a.pdf` and a symlink
/// to it all name the same file
fn push_unique(files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>, path: PathBuf) {
    let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    if seen.insert(key) {
        files.push(path);
    }
}
