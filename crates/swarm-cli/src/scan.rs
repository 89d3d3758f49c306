//! Source file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directories never descended into.
const SKIPPED_DIRS: [&str; 2] = ["__pycache__", "node_modules"];

/// Files under `root` with one of `extensions`, sorted, at most `limit`.
pub fn scan(root: &Path, extensions: &[String], limit: usize) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !SKIPPED_DIRS.contains(&&*name)
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "walk error");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| has_extension(path, extensions))
        .collect();

    files.sort();
    files.truncate(limit);
    debug!(root = %root.display(), found = files.len(), "scanned");
    files
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
