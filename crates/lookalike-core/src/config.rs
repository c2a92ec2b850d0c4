//! Matching and scanning configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default minimum common-prefix length for grouping.
pub const DEFAULT_MIN_PREFIX_LEN: usize = 3;

/// Configuration for prefix matching.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MatchConfig {
    /// Minimum common-prefix length (in bytes) for two base filenames to
    /// be merged into the same group. Must be at least 1.
    #[builder(default = "DEFAULT_MIN_PREFIX_LEN")]
    #[serde(default = "default_min_prefix_len")]
    pub min_prefix_len: usize,
}

fn default_min_prefix_len() -> usize {
    DEFAULT_MIN_PREFIX_LEN
}

impl MatchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.min_prefix_len {
            return Err("min_prefix_len must be at least 1".to_string());
        }
        Ok(())
    }
}

impl MatchConfig {
    /// Create a new match config builder.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Create a config with the given minimum prefix length.
    ///
    /// The value is taken as-is; use [`MatchConfig::builder`] when the
    /// length comes from untrusted input and needs validation.
    pub fn new(min_prefix_len: usize) -> Self {
        Self { min_prefix_len }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PREFIX_LEN)
    }
}

/// Configuration for scanning a directory level.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Directory whose immediate children are listed.
    pub root: PathBuf,

    /// Include hidden files (starting with `.`).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: true,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
