//! Terminal user interface for lookalike.
//!
//! A small four-screen browser over the match groups, built with ratatui:
//!
//! 1. **Groups** - pick a group of similarly named files
//! 2. **First file** - pick the left side of the comparison
//! 3. **Second file** - pick the right side (the left side is skipped)
//! 4. **Diff** - scroll through the side-by-side diff output
//!
//! # Keyboard
//!
//! - `j`/`k` or arrows - move (or scroll the diff)
//! - `Enter`/`Space` - select
//! - `Esc` - back one screen (quits from the group list)
//! - `n` - next group on the group list
//! - `g`/`G` - jump to top/bottom
//! - `q` / `Ctrl-C` - quit

mod app;
mod event;
mod ui;

pub use app::{App, AppResult};

use lookalike_core::MatchGroup;
use lookalike_diff::DiffRunner;

/// Run the TUI over a set of match groups.
pub fn run(groups: Vec<MatchGroup>, runner: DiffRunner) -> AppResult<()> {
    let terminal = ratatui::init();
    let result = App::new(groups, runner).run(terminal);
    ratatui::restore();
    result
}
