//! Runs the system diff tool against pairs of files.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

const DEFAULT_TOOL: &str = "diff";
const SIDE_BY_SIDE_WIDTH: &str = "--width=120";

/// Errors from invoking the diff tool.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The tool could not be started at all.
    #[error("failed to execute {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited with a code that does not mean "files differ".
    #[error("{tool} exited with status {code:?}")]
    Failed { tool: String, code: Option<i32> },
}

/// Executes diff commands to compare files.
///
/// Exit status 1 from a diff tool means the files differ and is treated as
/// success; only spawn failures (and, for [`DiffRunner::identical`], exit
/// codes past 1) surface as errors.
#[derive(Debug, Clone)]
pub struct DiffRunner {
    tool: String,
}

impl DiffRunner {
    /// Create a runner; `None` or an empty string uses the system `diff`.
    pub fn new(tool: Option<String>) -> Self {
        Self {
            tool: tool
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TOOL.to_string()),
        }
    }

    /// The configured diff command.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Side-by-side comparison (`-y --width=120`).
    pub fn side_by_side(&self, left: &Path, right: &Path) -> Result<String, DiffError> {
        self.run(&["-y", SIDE_BY_SIDE_WIDTH], left, right)
    }

    /// Unified comparison (`-u`).
    pub fn unified(&self, left: &Path, right: &Path) -> Result<String, DiffError> {
        self.run(&["-u"], left, right)
    }

    /// Quiet content check: `Ok(true)` when the files are identical,
    /// `Ok(false)` when the tool exits 1 (files differ).
    pub fn identical(&self, left: &Path, right: &Path) -> Result<bool, DiffError> {
        let status = Command::new(&self.tool)
            .arg("-q")
            .arg(left)
            .arg(right)
            .status()
            .map_err(|e| DiffError::Spawn {
                tool: self.tool.clone(),
                source: e,
            })?;

        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            code => Err(DiffError::Failed {
                tool: self.tool.clone(),
                code,
            }),
        }
    }

    fn run(&self, flags: &[&str], left: &Path, right: &Path) -> Result<String, DiffError> {
        tracing::debug!(tool = %self.tool, ?flags, "running diff");

        let output = Command::new(&self.tool)
            .args(flags)
            .arg(left)
            .arg(right)
            .output()
            .map_err(|e| DiffError::Spawn {
                tool: self.tool.clone(),
                source: e,
            })?;

        // Combined stdout + stderr, returned regardless of exit code since
        // nonzero usually just means the files differ.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        Ok(text)
    }
}

impl Default for DiffRunner {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_pair(a: &str, b: &str) -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let left = temp.path().join("left.txt");
        let right = temp.path().join("right.txt");
        fs::write(&left, a).unwrap();
        fs::write(&right, b).unwrap();
        (temp, left, right)
    }

    #[test]
    fn test_default_tool() {
        assert_eq!(DiffRunner::new(None).tool(), "diff");
        assert_eq!(DiffRunner::new(Some(String::new())).tool(), "diff");
        assert_eq!(DiffRunner::new(Some("delta".to_string())).tool(), "delta");
    }

    #[test]
    fn test_identical_files() {
        let (_temp, left, right) = write_pair("same\n", "same\n");
        let runner = DiffRunner::default();
        assert!(runner.identical(&left, &right).unwrap());
    }

    #[test]
    fn test_differing_files() {
        let (_temp, left, right) = write_pair("one\n", "two\n");
        let runner = DiffRunner::default();
        assert!(!runner.identical(&left, &right).unwrap());
    }

    #[test]
    fn test_unified_output_mentions_change() {
        let (_temp, left, right) = write_pair("one\n", "two\n");
        let output = DiffRunner::default().unified(&left, &right).unwrap();
        assert!(output.contains("-one"));
        assert!(output.contains("+two"));
    }

    #[test]
    fn test_side_by_side_differ_does_not_error() {
        let (_temp, left, right) = write_pair("one\n", "two\n");
        let output = DiffRunner::default().side_by_side(&left, &right).unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_missing_tool_is_spawn_error() {
        let (_temp, left, right) = write_pair("a", "b");
        let runner = DiffRunner::new(Some("definitely-not-a-real-diff".to_string()));
        assert!(matches!(
            runner.side_by_side(&left, &right),
            Err(DiffError::Spawn { .. })
        ));
    }
}
