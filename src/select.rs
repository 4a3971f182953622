//! Builds the list of files to operate on
//!
//! Either the caller names the files outright, or one directory is scanned
//! and filtered by extension or by a name pattern. Scans are not recursive,
//! only regular files are kept and the result is sorted so the end-of-run
//! report comes out in a stable order.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::UnlockResult;

/// Names of the regular files in `dir` whose extension is one of `extensions`
///
/// Extensions are accepted with or without their leading dot and matched
/// case-insensitively
pub fn by_extension(dir: &Path, extensions: &[String]) -> UnlockResult<Vec<PathBuf>> {
    let extensions: Vec<&str> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();
    scan(dir, |name| {
        Path::new(name)
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    })
}

/// Names of the regular files in `dir` whose name matches `pattern`
///
/// The pattern must match at the start of the name but does not have to cover
/// the whole of it
pub fn by_regex(dir: &Path, pattern: &str) -> UnlockResult<Vec<PathBuf>> {
    let re = Regex::new(pattern)?;
    scan(dir, |name| re.find(name).is_some_and(|m| m.start() == 0))
}

fn scan<F: Fn(&str) -> bool>(dir: &Path, keep: F) -> UnlockResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(&keep) {
            files.push(PathBuf::from(name));
        }
    }
    files.sort();
    Ok(files)
}
