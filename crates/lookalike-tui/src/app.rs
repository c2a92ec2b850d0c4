//! Application state and logic.

use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use lookalike_core::MatchGroup;
use lookalike_diff::DiffRunner;

use crate::event::KeyAction;
use crate::ui::render_app;

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Lines scrolled by PageUp/PageDown in the diff view.
const PAGE_SIZE: u16 = 10;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Picking a group.
    Groups,
    /// Picking the left side of the comparison.
    FirstFile,
    /// Picking the right side of the comparison.
    SecondFile,
    /// Viewing diff output.
    Diff,
}

/// Main application state.
pub struct App {
    /// Groups of similarly named files, as produced by the matcher.
    pub(crate) groups: Vec<MatchGroup>,
    /// Diff tool wrapper.
    runner: DiffRunner,
    /// Active screen.
    pub(crate) screen: Screen,
    /// Cursor within the active list.
    pub(crate) cursor: usize,
    /// Group being browsed on the file screens.
    pub(crate) group_index: usize,
    /// Index of the chosen left-side file within the current group.
    pub(crate) first: Option<usize>,
    /// Rendered diff output.
    pub(crate) diff_output: String,
    /// Title for the diff view ("left | right").
    pub(crate) diff_title: String,
    /// Vertical scroll offset in the diff view.
    pub(crate) scroll: u16,
    /// Number of lines in the diff output, for scroll clamping.
    diff_lines: u16,
    /// Error line shown instead of the help line.
    pub(crate) status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new app over the given groups.
    pub fn new(groups: Vec<MatchGroup>, runner: DiffRunner) -> Self {
        Self {
            groups,
            runner,
            screen: Screen::Groups,
            cursor: 0,
            group_index: 0,
            first: None,
            diff_output: String::new(),
            diff_title: String::new(),
            scroll: 0,
            diff_lines: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Run the main event loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| render_app(frame, &self))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(KeyAction::from_key_event(key));
                }
            }
        }
        Ok(())
    }

    /// Group currently browsed on the file screens.
    pub(crate) fn current_group(&self) -> &MatchGroup {
        &self.groups[self.group_index]
    }

    fn list_len(&self) -> usize {
        match self.screen {
            Screen::Groups => self.groups.len(),
            Screen::FirstFile | Screen::SecondFile => self.current_group().count(),
            Screen::Diff => 0,
        }
    }

    pub(crate) fn on_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::MoveDown => self.move_cursor(true),
            KeyAction::MoveUp => self.move_cursor(false),
            KeyAction::JumpToTop => self.jump_to_top(),
            KeyAction::JumpToBottom => self.jump_to_bottom(),
            KeyAction::PageDown => {
                if self.screen == Screen::Diff {
                    self.scroll = (self.scroll + PAGE_SIZE).min(self.max_scroll());
                }
            }
            KeyAction::PageUp => {
                if self.screen == Screen::Diff {
                    self.scroll = self.scroll.saturating_sub(PAGE_SIZE);
                }
            }
            KeyAction::Select => self.select(),
            KeyAction::Back => self.back(),
            KeyAction::NextGroup => {
                if self.screen == Screen::Groups && !self.groups.is_empty() {
                    self.cursor = (self.cursor + 1) % self.groups.len();
                }
            }
            KeyAction::None => {}
        }
    }

    fn move_cursor(&mut self, downward: bool) {
        if self.screen == Screen::Diff {
            self.scroll = if downward {
                (self.scroll + 1).min(self.max_scroll())
            } else {
                self.scroll.saturating_sub(1)
            };
            return;
        }

        let len = self.list_len();
        if len == 0 {
            return;
        }
        if downward {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.skip_chosen(downward);
    }

    fn jump_to_top(&mut self) {
        if self.screen == Screen::Diff {
            self.scroll = 0;
        } else {
            self.cursor = 0;
            self.skip_chosen(true);
        }
    }

    fn jump_to_bottom(&mut self) {
        if self.screen == Screen::Diff {
            self.scroll = self.max_scroll();
        } else if self.list_len() > 0 {
            self.cursor = self.list_len() - 1;
            self.skip_chosen(false);
        }
    }

    /// On the second-file screen the cursor never rests on the file already
    /// chosen as the first side.
    fn skip_chosen(&mut self, downward: bool) {
        if self.screen != Screen::SecondFile {
            return;
        }
        let Some(first) = self.first else { return };
        if self.cursor != first {
            return;
        }
        let len = self.list_len();
        if downward {
            if self.cursor + 1 < len {
                self.cursor += 1;
            } else if self.cursor > 0 {
                self.cursor -= 1;
            }
        } else if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    fn select(&mut self) {
        match self.screen {
            Screen::Groups => {
                if self.groups.is_empty() {
                    return;
                }
                self.group_index = self.cursor;
                self.screen = Screen::FirstFile;
                self.cursor = 0;
            }
            Screen::FirstFile => {
                self.first = Some(self.cursor);
                self.screen = Screen::SecondFile;
                // Groups always hold at least two files.
                self.cursor = if self.cursor == 0 { 1 } else { 0 };
            }
            Screen::SecondFile => self.run_diff(),
            Screen::Diff => {}
        }
    }

    fn back(&mut self) {
        match self.screen {
            Screen::Diff => {
                self.screen = Screen::SecondFile;
            }
            Screen::SecondFile => {
                self.screen = Screen::FirstFile;
                self.cursor = self.first.take().unwrap_or(0);
            }
            Screen::FirstFile => {
                self.screen = Screen::Groups;
                self.cursor = self.group_index;
            }
            Screen::Groups => self.should_quit = true,
        }
        self.status = None;
    }

    fn run_diff(&mut self) {
        let Some(first) = self.first else { return };
        let group = self.current_group();
        let left = &group.paths[first];
        let right = &group.paths[self.cursor];

        match self.runner.side_by_side(left, right) {
            Ok(output) => {
                self.diff_title = format!("{} | {}", display_name(left), display_name(right));
                self.diff_lines = output.lines().count().min(u16::MAX as usize) as u16;
                self.diff_output = if output.is_empty() {
                    "(files are identical)".to_string()
                } else {
                    output
                };
                self.scroll = 0;
                self.status = None;
                self.screen = Screen::Diff;
            }
            Err(err) => {
                self.status = Some(format!("diff failed: {err}"));
            }
        }
    }

    fn max_scroll(&self) -> u16 {
        self.diff_lines.saturating_sub(1)
    }
}

/// Final path segment for display, falling back to the whole path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app_with_groups() -> App {
        let groups = vec![
            MatchGroup {
                paths: vec![
                    PathBuf::from("/d/document.txt"),
                    PathBuf::from("/d/document-1.txt"),
                    PathBuf::from("/d/document-2.txt"),
                ],
            },
            MatchGroup {
                paths: vec![PathBuf::from("/d/image.png"), PathBuf::from("/d/image-1.png")],
            },
        ];
        // Bogus tool so an accidental diff run fails fast instead of
        // shelling out to the real system diff.
        App::new(groups, DiffRunner::new(Some("missing-tool-for-tests".into())))
    }

    #[test]
    fn test_select_group_enters_file_screen() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::MoveDown);
        app.on_key(KeyAction::Select);
        assert_eq!(app.screen, Screen::FirstFile);
        assert_eq!(app.group_index, 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_second_file_cursor_skips_first() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::Select); // group 0
        app.on_key(KeyAction::Select); // first file = index 0
        assert_eq!(app.screen, Screen::SecondFile);
        assert_eq!(app.cursor, 1);

        // Moving up from index 1 would land on the chosen file; the cursor
        // steps over it.
        app.on_key(KeyAction::MoveUp);
        assert_ne!(app.cursor, 0);
    }

    #[test]
    fn test_back_unwinds_screens() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::Select);
        app.on_key(KeyAction::MoveDown);
        app.on_key(KeyAction::Select);
        assert_eq!(app.screen, Screen::SecondFile);

        app.on_key(KeyAction::Back);
        assert_eq!(app.screen, Screen::FirstFile);
        assert_eq!(app.cursor, 1); // restored to the first-file choice

        app.on_key(KeyAction::Back);
        assert_eq!(app.screen, Screen::Groups);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_failed_diff_sets_status() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::Select);
        app.on_key(KeyAction::Select);
        app.on_key(KeyAction::Select); // diff with a missing tool
        assert_eq!(app.screen, Screen::SecondFile);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_next_group_wraps() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::NextGroup);
        assert_eq!(app.cursor, 1);
        app.on_key(KeyAction::NextGroup);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut app = app_with_groups();
        app.on_key(KeyAction::MoveUp);
        assert_eq!(app.cursor, 0);
        app.on_key(KeyAction::JumpToBottom);
        assert_eq!(app.cursor, 1);
        app.on_key(KeyAction::MoveDown);
        assert_eq!(app.cursor, 1);
    }
}
