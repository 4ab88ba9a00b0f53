//! In-place normalization of a directory of migration files.
//!
//! Files are handled strictly one after another: each is read in full,
//! normalized in memory, written back in full, and reported to the caller
//! before the next one is opened. The first I/O failure aborts the run,
//! leaving earlier files normalized and later ones untouched.

use crate::config::FixConfig;
use crate::discover::discover_files;
use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with each matched file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    /// Rewrite every matched file with normalized content
    #[default]
    Write,
    /// Only report which files would change
    Check,
}

/// Outcome for a single processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Path of the file, as discovered
    pub path: PathBuf,

    /// Whether a leading BOM was (or would be) removed
    pub bom_removed: bool,

    /// Number of CRLF pairs converted (or that would be converted)
    pub crlf_replaced: usize,

    /// Whether the file was rewritten
    pub written: bool,
}

impl FileOutcome {
    /// True if normalization altered the content
    pub fn changed(&self) -> bool {
        self.bom_removed || self.crlf_replaced > 0
    }
}

/// Summary of a whole run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    /// One entry per matched file
    pub files: Vec<FileOutcome>,
}

impl FixReport {
    /// Number of processed files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no file matched
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files whose content changed (or would change)
    pub fn changed_count(&self) -> usize {
        self.files.iter().filter(|f| f.changed()).count()
    }

    /// Paths of files whose content changed (or would change)
    pub fn changed_files(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.changed())
            .map(|f| f.path.as_path())
    }

    /// Paths of every processed file
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }
}

/// Normalize every migration file selected by `config`.
pub fn fix_migrations(config: &FixConfig, mode: FixMode) -> CoreResult<FixReport> {
    fix_migrations_with(config, mode, |_| {})
}

/// Normalize every migration file selected by `config`, calling `on_file`
/// right after each file has been handled.
pub fn fix_migrations_with<F>(
    config: &FixConfig,
    mode: FixMode,
    mut on_file: F,
) -> CoreResult<FixReport>
where
    F: FnMut(&FileOutcome),
{
    config.validate()?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Resolved config:\n{}", config.to_yaml()?);
    }
    let pattern = config.compiled_pattern()?;
    let paths = discover_files(&config.migrations_dir, &pattern)?;

    let mut report = FixReport::default();
    for path in paths {
        let outcome = fix_file(&path, mode)?;
        on_file(&outcome);
        report.files.push(outcome);
    }

    log::debug!(
        "Processed {} file(s), {} changed",
        report.len(),
        report.changed_count()
    );
    Ok(report)
}

/// Normalize a single file.
///
/// In [`FixMode::Write`] the file is always rewritten, even when its content
/// is already normalized.
pub fn fix_file(path: &Path, mode: FixMode) -> CoreResult<FileOutcome> {
    let content = fs::read(path).map_err(|e| CoreError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;

    let normalized = normalize(&content);

    let written = match mode {
        FixMode::Write => {
            fs::write(path, &normalized.bytes).map_err(|e| CoreError::WriteFile {
                path: path.display().to_string(),
                source: e,
            })?;
            true
        }
        FixMode::Check => false,
    };

    log::debug!(
        "{}: bom_removed={}, crlf_replaced={}, written={}",
        path.display(),
        normalized.bom_removed,
        normalized.crlf_replaced,
        written
    );

    Ok(FileOutcome {
        path: path.to_path_buf(),
        bom_removed: normalized.bom_removed,
        crlf_replaced: normalized.crlf_replaced,
        written,
    })
}

#[cfg(test)]
#[path = "fixer_test.rs"]
mod tests;
