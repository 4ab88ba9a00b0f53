//! Configuration types and parsing for migfix.yml

use crate::error::{CoreError, CoreResult};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory scanned when nothing else is configured.
pub const DEFAULT_MIGRATIONS_DIR: &str = "backend/migrations";

/// File name pattern matched when nothing else is configured.
pub const DEFAULT_PATTERN: &str = "*.sql";

/// Config file names looked up by [`FixConfig::load_from_dir`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["migfix.yml", "migfix.yaml"];

/// Where to look for migration files and which ones to fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixConfig {
    /// Directory containing the migration files (not searched recursively)
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,

    /// Glob matched against file names inside `migrations_dir`
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_migrations_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MIGRATIONS_DIR)
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            pattern: default_pattern(),
        }
    }
}

impl FixConfig {
    /// Build a config for an explicit directory and pattern
    pub fn new(migrations_dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
            pattern: pattern.into(),
        }
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: FixConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a directory.
    ///
    /// Looks for migfix.yml or migfix.yaml and falls back to the defaults
    /// when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.migrations_dir.as_os_str().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_dir cannot be empty".to_string(),
            });
        }

        if self.pattern.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "pattern cannot be empty".to_string(),
            });
        }

        if self.pattern.contains('/') || self.pattern.contains(std::path::MAIN_SEPARATOR) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "pattern '{}' must match file names only, not paths",
                    self.pattern
                ),
            });
        }

        self.compiled_pattern().map(|_| ())
    }

    /// Render the configuration as YAML, in the same shape `load` reads
    pub fn to_yaml(&self) -> CoreResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Compile `pattern` into a glob matcher
    pub fn compiled_pattern(&self) -> CoreResult<Pattern> {
        Pattern::new(&self.pattern).map_err(|e| CoreError::ConfigInvalid {
            message: format!("invalid pattern '{}': {}", self.pattern, e),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
