//! mf-core - Core library for migfix
//!
//! This crate provides the byte-level normalization (UTF-8 BOM removal and
//! CRLF to LF conversion), migration file discovery, configuration loading,
//! and the in-place fixer that ties them together.

pub mod config;
pub mod discover;
pub mod error;
pub mod fixer;
pub mod normalize;

pub use config::FixConfig;
pub use discover::discover_files;
pub use error::{CoreError, CoreResult};
pub use fixer::{fix_file, fix_migrations, fix_migrations_with, FileOutcome, FixMode, FixReport};
pub use normalize::{crlf_to_lf, normalize, strip_bom, Normalized, UTF8_BOM};
