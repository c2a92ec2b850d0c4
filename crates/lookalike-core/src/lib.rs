//! Core types and algorithms for lookalike.
//!
//! This crate provides the name-matching machinery used throughout the
//! lookalike ecosystem: filename decomposition, prefix-based grouping of
//! similarly named files, and suffix-pattern filtering with date-vs-version
//! classification. Everything here is a pure function over in-memory path
//! lists; scanning, diffing, and presentation live in sibling crates.

mod config;
mod entry;
mod error;
mod matcher;
mod suffix;

pub use config::{
    DEFAULT_MIN_PREFIX_LEN, MatchConfig, MatchConfigBuilder, ScanConfig, ScanConfigBuilder,
};
pub use entry::{FileEntry, split_name};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use matcher::{MatchGroup, MatchReport, PrefixMatcher, common_prefix_len};
pub use suffix::{DateRule, SuffixFilter, SuffixPattern, SuffixVerdict, classify_suffix};
