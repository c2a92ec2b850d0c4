//! External diff invocation for lookalike.
//!
//! Shells out to the system diff tool (or a user-supplied replacement)
//! rather than computing diffs in-process; the tool's output is shown to
//! the user verbatim.

mod runner;

pub use runner::{DiffError, DiffRunner};
