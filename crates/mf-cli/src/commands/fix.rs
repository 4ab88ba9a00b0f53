//! Fix command implementation - normalize migration files in place.

use anyhow::{Context, Result};
use mf_core::{fix_migrations_with, FileOutcome, FixMode, FixReport};

use crate::cli::{FixArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{resolve_config, ExitCode};

/// Printed once every matched file has been rewritten.
pub(crate) const COMPLETION_MESSAGE: &str = "All migration files have been fixed!";

/// Execute the fix command.
pub(crate) fn execute(args: &FixArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(args, global)?;
    let mode = if args.check {
        FixMode::Check
    } else {
        FixMode::Write
    };

    log::debug!(
        "Fixing '{}' in {} (mode={:?})",
        config.pattern,
        config.migrations_dir.display(),
        mode
    );

    let text = args.output == OutputFormat::Text;
    let report = fix_migrations_with(&config, mode, |outcome| {
        if text {
            if let Some(line) = file_line(outcome, mode) {
                println!("{line}");
            }
        }
    })
    .with_context(|| {
        format!(
            "Failed to fix migration files in {}",
            config.migrations_dir.display()
        )
    })?;

    match args.output {
        OutputFormat::Text => println!("{}", summary_line(&report, mode)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    if mode == FixMode::Check && report.changed_count() > 0 {
        return Err(ExitCode(1).into());
    }

    Ok(())
}

/// Progress line for one processed file, if the mode prints one for it.
fn file_line(outcome: &FileOutcome, mode: FixMode) -> Option<String> {
    match mode {
        FixMode::Write => Some(format!("Fixed: {}", outcome.path.display())),
        FixMode::Check if outcome.changed() => {
            Some(format!("Would fix: {}", outcome.path.display()))
        }
        FixMode::Check => None,
    }
}

/// Final line printed after all files.
fn summary_line(report: &FixReport, mode: FixMode) -> String {
    match mode {
        FixMode::Write => COMPLETION_MESSAGE.to_string(),
        FixMode::Check => match report.changed_count() {
            0 => "All migration files are already normalized.".to_string(),
            n => format!("{n} migration file(s) need fixing."),
        },
    }
}

#[cfg(test)]
#[path = "fix_test.rs"]
mod tests;
