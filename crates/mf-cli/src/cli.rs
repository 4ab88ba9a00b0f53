//! CLI argument definitions using clap derive API

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// fix-migrations - strip UTF-8 BOMs and convert CRLF to LF in SQL migration files
#[derive(Parser, Debug)]
#[command(name = "fix-migrations")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to fix and how
    #[command(flatten)]
    pub fix: FixArgs,
}

/// Global arguments
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (default: migfix.yml in the current directory, if present)
    #[arg(short, long, env = "MIGFIX_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for fixing migration files
#[derive(Args, Debug, Clone, Default)]
pub struct FixArgs {
    /// Directory containing the migration files [default: backend/migrations]
    pub dir: Option<PathBuf>,

    /// Glob matched against file names in the directory [default: *.sql]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Report files that would change without writing them; exits 1 if any would
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per file plus a completion message
    #[default]
    Text,
    /// JSON report on stdout
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
