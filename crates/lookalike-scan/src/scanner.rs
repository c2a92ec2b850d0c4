//! Single-level directory scanner built on jwalk.

use std::path::PathBuf;

use jwalk::WalkDir;

use lookalike_core::{ScanConfig, ScanError, ScanWarning, WarningKind};

/// Result of scanning one directory level.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Non-directory entries as full paths, sorted by name.
    pub files: Vec<PathBuf>,
    /// Non-fatal problems encountered while reading entries.
    pub warnings: Vec<ScanWarning>,
}

impl ScanOutcome {
    /// Number of files found.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Lists the files directly under a directory.
#[derive(Debug, Default)]
pub struct DirScanner;

impl DirScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Collect the files directly under the configured root.
    ///
    /// Directories (and symlinks to directories) are skipped; unreadable
    /// entries become warnings instead of failing the scan. The returned
    /// list is sorted by path so downstream grouping sees a stable order.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
        let root = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        let mut files = Vec::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&root)
            .skip_hidden(!config.include_hidden)
            .min_depth(1)
            .max_depth(1);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warnings.push(ScanWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::ReadError,
                    ));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            files.push(entry.path());
        }

        files.sort();

        tracing::debug!(
            root = %root.display(),
            files = files.len(),
            warnings = warnings.len(),
            "scan complete"
        );

        Ok(ScanOutcome { files, warnings })
    }
}
