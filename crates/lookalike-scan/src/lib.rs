//! Directory listing for lookalike.
//!
//! Lists the files directly under a single directory level; recursion is
//! deliberately out of scope since name matching only makes sense between
//! siblings.

mod scanner;

pub use scanner::{DirScanner, ScanOutcome};

// Re-export core types callers need alongside the scanner.
pub use lookalike_core::{ScanConfig, ScanError, ScanWarning};
