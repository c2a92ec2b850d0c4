//! Suffix-pattern filtering with date-vs-version classification.
//!
//! A suffix pattern narrows the file list to stems that end with a
//! version-like suffix (`document-1`, `draft 2`) plus the unsuffixed base
//! file each of them points back to. Numeric suffixes that look like
//! calendar dates (`report-2024`, `log-2026-01-30`) are excluded by an
//! ordered list of heuristics.

use std::collections::HashSet;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entry::FileEntry;

static TRAILING_HYPHEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+$").unwrap());
static HYPHEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+").unwrap());

/// A compiled suffix pattern, anchored to the end of the stem.
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    regex: Regex,
}

impl SuffixPattern {
    /// Compile a user-supplied suffix pattern.
    ///
    /// A `$` anchor is appended when the source does not already end with
    /// one, so the pattern only matches at the end of a stem. Callers are
    /// expected to surface the compile error to the user before any
    /// filtering happens.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = if source.ends_with('$') {
            source.to_string()
        } else {
            format!("{source}$")
        };
        Ok(Self {
            regex: Regex::new(&anchored)?,
        })
    }

    /// The anchored pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find a match that ends exactly at the end of `stem`.
    ///
    /// A match somewhere mid-stem does not count: a "hyphen + 1-2 digits"
    /// pattern must reject `file-1-backup` even though `-1` occurs inside
    /// it.
    fn match_anchored(&self, stem: &str) -> Option<(usize, usize)> {
        let m = self.regex.find(stem)?;
        (m.end() == stem.len()).then(|| (m.start(), m.end()))
    }

    /// Stem with every pattern match deleted.
    fn base_name(&self, stem: &str) -> String {
        self.regex.replace_all(stem, "").into_owned()
    }
}

/// Which heuristic judged a suffix date-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The residual base name itself still ends in hyphen+digits, so the
    /// match was likely the tail of a larger date (`file-2026-01` left
    /// after stripping `-30`).
    TrailingResidualDigits,
    /// The stem carries three or more hyphen+digit runs, the shape of a
    /// year-month-day pattern.
    SequenceCount,
    /// Some hyphen+digit run carries four or more digits, treated as a
    /// calendar year.
    LongNumericSegment,
}

/// Verdict for an anchored suffix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixVerdict {
    /// Version-like: the file is kept.
    Version,
    /// Date-like: the file is dropped, tagged with the rule that fired.
    Date(DateRule),
}

impl SuffixVerdict {
    /// Check if this verdict excludes the file.
    pub fn is_date(&self) -> bool {
        matches!(self, SuffixVerdict::Date(_))
    }
}

/// Classify an anchored suffix match as version-like or date-like.
///
/// `stem` is the full stem and `base_name` the stem with the matched
/// suffix deleted. The rules run in order and short-circuit, so a given
/// (stem, base name) pair always yields the same verdict.
///
/// Known limit: a nested version suffix like `file-1-2` strips to
/// `file-1`, which trips [`DateRule::TrailingResidualDigits`] and gets
/// dropped even though it is not a date.
pub fn classify_suffix(stem: &str, base_name: &str) -> SuffixVerdict {
    if TRAILING_HYPHEN_DIGITS.is_match(base_name) {
        return SuffixVerdict::Date(DateRule::TrailingResidualDigits);
    }

    let runs: Vec<&str> = HYPHEN_DIGITS.find_iter(stem).map(|m| m.as_str()).collect();
    if runs.len() >= 3 {
        return SuffixVerdict::Date(DateRule::SequenceCount);
    }

    // A run is "-" plus digits, so length 5 means 4+ digits.
    if runs.iter().any(|run| run.len() >= 5) {
        return SuffixVerdict::Date(DateRule::LongNumericSegment);
    }

    SuffixVerdict::Version
}

/// Filters a file list to version-like suffix matches and their base files.
pub struct SuffixFilter {
    pattern: SuffixPattern,
}

impl SuffixFilter {
    /// Create a filter around a compiled pattern.
    pub fn new(pattern: SuffixPattern) -> Self {
        Self { pattern }
    }

    /// Filter `files` down to version-like matches plus recovered base files.
    ///
    /// Three passes over in-memory names, no I/O:
    /// 1. keep files whose stem matches the pattern at its end and whose
    ///    match classifies as version-like;
    /// 2. re-include any file whose stem equals the residual base name of
    ///    an accepted match (recovering `document.txt` once
    ///    `document-1.txt` is accepted — but never fabricating it);
    /// 3. deduplicate, preserving input order.
    pub fn filter(&self, files: &[PathBuf]) -> Vec<PathBuf> {
        let entries: Vec<FileEntry> = files.iter().map(FileEntry::new).collect();

        let mut accepted = vec![false; entries.len()];
        let mut base_names: HashSet<String> = HashSet::new();

        for (i, entry) in entries.iter().enumerate() {
            let stem = entry.stem();
            if self.pattern.match_anchored(stem).is_none() {
                continue;
            }
            let base_name = self.pattern.base_name(stem);
            if classify_suffix(stem, &base_name).is_date() {
                continue;
            }
            accepted[i] = true;
            base_names.insert(base_name);
        }

        let mut seen: HashSet<&PathBuf> = HashSet::new();
        let mut result = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            let keep = accepted[i] || base_names.contains(entry.stem());
            if keep && seen.insert(&entry.path) {
                result.push(entry.path.clone());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn filter(pattern: &str, files: &[&str]) -> Vec<PathBuf> {
        let pattern = SuffixPattern::new(pattern).unwrap();
        SuffixFilter::new(pattern).filter(&paths(files))
    }

    #[test]
    fn test_pattern_anchor_appended_once() {
        assert_eq!(SuffixPattern::new(r"-\d{1,2}").unwrap().as_str(), r"-\d{1,2}$");
        assert_eq!(SuffixPattern::new(r"-\d{1,2}$").unwrap().as_str(), r"-\d{1,2}$");
    }

    #[test]
    fn test_pattern_compile_error_surfaces() {
        assert!(SuffixPattern::new(r"-\d{").is_err());
    }

    #[test]
    fn test_anchored_match_rejects_mid_stem() {
        let pattern = SuffixPattern::new(r"-\d{1,2}").unwrap();
        assert!(pattern.match_anchored("document-1").is_some());
        assert!(pattern.match_anchored("document-2").is_some());
        assert!(pattern.match_anchored("file-1-backup").is_none());
        assert!(pattern.match_anchored("document").is_none());
    }

    #[test]
    fn test_classify_version_like() {
        assert_eq!(classify_suffix("file-1", "file"), SuffixVerdict::Version);
        assert_eq!(classify_suffix("draft-12", "draft"), SuffixVerdict::Version);
    }

    #[test]
    fn test_classify_trailing_residual_digits() {
        // Stripping "-30" from a date leaves "-01" at the end.
        assert_eq!(
            classify_suffix("file-2026-01-30", "file-2026-01"),
            SuffixVerdict::Date(DateRule::TrailingResidualDigits)
        );
    }

    #[test]
    fn test_classify_sequence_count() {
        assert_eq!(
            classify_suffix("a-1-2-3", "a"),
            SuffixVerdict::Date(DateRule::SequenceCount)
        );
    }

    #[test]
    fn test_classify_long_numeric_segment() {
        assert_eq!(
            classify_suffix("report-2024", "report"),
            SuffixVerdict::Date(DateRule::LongNumericSegment)
        );
        // Three digits is still a version.
        assert_eq!(classify_suffix("report-123", "report"), SuffixVerdict::Version);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                classify_suffix("file-2026-01-30", "file-2026-01"),
                SuffixVerdict::Date(DateRule::TrailingResidualDigits)
            );
        }
    }

    #[test]
    fn test_nested_version_suffix_is_dropped() {
        // Documented limit: the residual of "file-1-2" ends in "-1".
        assert_eq!(
            classify_suffix("file-1-2", "file-1"),
            SuffixVerdict::Date(DateRule::TrailingResidualDigits)
        );
        let result = filter(r"-\d{1,2}", &["/d/file-1-2.txt"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_base_file_recovery() {
        let result = filter(
            r"-\d{1,2}",
            &["/d/document.txt", "/d/document-1.txt", "/d/document-2.txt"],
        );
        assert_eq!(
            result,
            paths(&["/d/document.txt", "/d/document-1.txt", "/d/document-2.txt"])
        );
    }

    #[test]
    fn test_date_files_excluded() {
        let result = filter(
            r"-\d{1,2}",
            &["/d/report.txt", "/d/report-1.txt", "/d/report-2024.txt"],
        );
        assert_eq!(result, paths(&["/d/report.txt", "/d/report-1.txt"]));
    }

    #[test]
    fn test_full_date_excluded() {
        let result = filter(
            r"-\d{1,2}",
            &["/d/document-2026-01-30.txt", "/d/document-1.txt"],
        );
        assert_eq!(result, paths(&["/d/document-1.txt"]));
    }

    #[test]
    fn test_no_base_file_is_not_fabricated() {
        let result = filter(r"-\d{1,2}", &["/d/document-1.txt", "/d/document-2.txt"]);
        assert_eq!(result, paths(&["/d/document-1.txt", "/d/document-2.txt"]));
    }

    #[test]
    fn test_space_digit_pattern() {
        let result = filter(
            r" \d+",
            &["/d/file.txt", "/d/file 1.txt", "/d/file 2.txt", "/d/file-backup.txt"],
        );
        assert_eq!(
            result,
            paths(&["/d/file.txt", "/d/file 1.txt", "/d/file 2.txt"])
        );
    }

    #[test]
    fn test_unrelated_files_dropped() {
        let result = filter(r"-\d{1,2}", &["/d/unrelated.txt", "/d/doc-1.txt"]);
        assert_eq!(result, paths(&["/d/doc-1.txt"]));
    }

    #[test]
    fn test_duplicate_inputs_deduplicated() {
        let result = filter(r"-\d{1,2}", &["/d/doc-1.txt", "/d/doc-1.txt", "/d/doc.txt"]);
        assert_eq!(result, paths(&["/d/doc-1.txt", "/d/doc.txt"]));
    }

    #[test]
    fn test_output_preserves_input_order() {
        let result = filter(
            r"-\d{1,2}",
            &["/d/doc-2.txt", "/d/doc.txt", "/d/doc-1.txt"],
        );
        assert_eq!(
            result,
            paths(&["/d/doc-2.txt", "/d/doc.txt", "/d/doc-1.txt"])
        );
    }
}
