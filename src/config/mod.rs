//! Configuration for pathquill accessors.
//!
//! This module provides the configuration structure for [`NestedAccessor`] with
//! sensible defaults and support for serialization/deserialization via serde.
//! Configuration can be loaded from TOML files so applications can keep their
//! path delimiter and strictness policy next to the rest of their settings.
//!
//! # Example
//!
//! ```
//! use pathquill::config::{AccessorConfig, Mode};
//!
//! // Use default configuration
//! let config = AccessorConfig::default();
//! assert_eq!(config.delimiter, ".");
//! assert_eq!(config.read_mode, Mode::Strict);
//!
//! // Create custom configuration
//! let custom = AccessorConfig {
//!     delimiter: "/".to_string(),
//!     ..AccessorConfig::default()
//! };
//! assert_eq!(custom.write_mode, Mode::Lenient);
//! ```
//!
//! [`NestedAccessor`]: crate::accessor::NestedAccessor

use crate::path::error::AccessorError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on nested array fan-outs during a read.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How a read or write reacts to a path that does not fit the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Reads fail when any branch misses; writes refuse to overwrite
    /// non-object intermediates.
    Strict,
    /// Reads degrade to `Null` or a partial list; writes replace non-object
    /// intermediates with fresh objects.
    Lenient,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        matches!(self, Mode::Strict)
    }
}

impl From<bool> for Mode {
    fn from(strict: bool) -> Self {
        if strict {
            Mode::Strict
        } else {
            Mode::Lenient
        }
    }
}

/// Configuration for a [`NestedAccessor`](crate::accessor::NestedAccessor).
///
/// # Fields
///
/// * `delimiter` - Separator used to split string paths (default: ".")
/// * `max_depth` - Bound on nested array fan-outs per read (default: 512)
/// * `read_mode` - Mode used by `get` (default: strict)
/// * `write_mode` - Mode used by `set` (default: lenient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorConfig {
    /// Separator used to split string paths
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Bound on nested array fan-outs per read
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Mode used by `get`
    #[serde(default = "default_read_mode")]
    pub read_mode: Mode,

    /// Mode used by `set`
    #[serde(default = "default_write_mode")]
    pub write_mode: Mode,
}

/// Returns the default path delimiter.
fn default_delimiter() -> String {
    ".".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_read_mode() -> Mode {
    Mode::Strict
}

fn default_write_mode() -> Mode {
    Mode::Lenient
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            max_depth: default_max_depth(),
            read_mode: default_read_mode(),
            write_mode: default_write_mode(),
        }
    }
}

impl AccessorConfig {
    /// Parses a configuration from TOML text. Missing fields take defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::config::{AccessorConfig, Mode};
    ///
    /// let config = AccessorConfig::from_toml_str("delimiter = \"/\"\nread_mode = \"lenient\"").unwrap();
    /// assert_eq!(config.delimiter, "/");
    /// assert_eq!(config.read_mode, Mode::Lenient);
    /// assert_eq!(config.max_depth, 512);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse accessor config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize accessor config")
    }

    /// Loads configuration from a TOML file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves configuration to a TOML file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        std::fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Rejects settings no accessor can work with.
    ///
    /// Runs on every TOML load and on every accessor construction.
    pub fn validate(&self) -> std::result::Result<(), AccessorError> {
        let reason = if self.delimiter.is_empty() {
            "delimiter must not be empty"
        } else if self.max_depth == 0 {
            "max_depth must be at least 1"
        } else {
            return Ok(());
        };
        Err(AccessorError::InvalidConfig {
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(Mode::from(true), Mode::Strict);
        assert_eq!(Mode::from(false), Mode::Lenient);
        assert!(Mode::Strict.is_strict());
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let err = AccessorConfig::from_toml_str("delimiter = \"\"").unwrap_err();
        assert!(err.to_string().contains("delimiter"));
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(AccessorConfig::from_toml_str("max_depth = 0").is_err());
    }

    #[test]
    fn test_validate_is_typed() {
        assert_eq!(AccessorConfig::default().validate(), Ok(()));

        let config = AccessorConfig {
            max_depth: 0,
            ..AccessorConfig::default()
        };
        assert_eq!(
            config.validate().map_err(|e| e.kind()),
            Err(crate::path::ErrorKind::InvalidConfig)
        );
    }

    #[test]
    fn test_save_reports_unwritable_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = AccessorConfig::default()
            .save_to(blocker.join("pathquill.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create config directory"));
    }
}
