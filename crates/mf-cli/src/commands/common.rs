//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use mf_core::FixConfig;
use std::fmt;
use std::path::Path;

use crate::cli::{FixArgs, GlobalArgs};

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run and stdout is flushed.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl ExitCode {
    /// Clamp into the range a process exit status can carry
    pub(crate) fn as_u8(&self) -> u8 {
        u8::try_from(self.0).unwrap_or(1)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only, never shown to the user
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Resolve the effective configuration: CLI flags over config file over defaults.
pub(crate) fn resolve_config(args: &FixArgs, global: &GlobalArgs) -> Result<FixConfig> {
    let mut config = match &global.config {
        Some(path) => FixConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FixConfig::load_from_dir(Path::new("."))
            .context("Failed to load config from current directory")?,
    };

    if let Some(dir) = &args.dir {
        config.migrations_dir = dir.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
