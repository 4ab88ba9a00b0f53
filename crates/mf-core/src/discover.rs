//! Migration file discovery.
//!
//! Only the immediate entries of the target directory are considered. The
//! pattern is matched against the file name, and dot-files only match a
//! pattern that itself starts with a dot.

use crate::error::{CoreError, CoreResult};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Find regular files directly inside `dir` whose name matches `pattern`.
///
/// Results are sorted by file name. A directory that does not exist yields
/// an empty list.
pub fn discover_files(dir: &Path, pattern: &Pattern) -> CoreResult<Vec<PathBuf>> {
    if !dir.exists() {
        log::warn!("Migrations directory not found: {}", dir.display());
        return Ok(Vec::new());
    }

    let read_dir_err = |e: std::io::Error| CoreError::ReadDir {
        path: dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();

        // Invalid UTF-8 becomes U+FFFD, which only a wildcard can match
        if !pattern.matches_with(&name.to_string_lossy(), MATCH_OPTIONS) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            log::debug!("Skipping non-file match: {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort();
    log::debug!(
        "Found {} file(s) matching '{}' in {}",
        files.len(),
        pattern.as_str(),
        dir.display()
    );
    Ok(files)
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
