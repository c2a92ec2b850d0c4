//! Rendering for the four TUI screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::{App, Screen, display_name};

/// Render the whole application frame.
pub fn render_app(frame: &mut Frame, app: &App) {
    let [title_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title(frame, app, title_area);

    match app.screen {
        Screen::Groups => render_groups(frame, app, body_area),
        Screen::FirstFile | Screen::SecondFile => render_files(frame, app, body_area),
        Screen::Diff => render_diff(frame, app, body_area),
    }

    render_help(frame, app, help_area);
}

fn title_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        " lookalike - {} group(s) of similar files",
        app.groups.len()
    );
    frame.render_widget(Paragraph::new(text).style(title_style()), area);
}

fn render_groups(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let names: Vec<String> = group.paths.iter().map(|p| display_name(p)).collect();
            ListItem::new(format!(
                "Group {}: {} files ({})",
                i + 1,
                group.count(),
                names.join(", ")
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Select a group "))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_files(frame: &mut Frame, app: &App, area: Rect) {
    let group = app.current_group();
    let items: Vec<ListItem> = group
        .paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let name = display_name(path);
            if app.first == Some(i) {
                ListItem::new(Line::from(vec![
                    Span::styled("[1] ", Style::default().fg(Color::Green)),
                    Span::styled(name, Style::default().add_modifier(Modifier::DIM)),
                ]))
            } else {
                ListItem::new(name)
            }
        })
        .collect();

    let title = match app.screen {
        Screen::FirstFile => " Select first file ",
        _ => " Select second file ",
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_diff(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} ", app.diff_title);
    let paragraph = Paragraph::new(app.diff_output.as_str())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        let line = Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, area);
        return;
    }

    let help = match app.screen {
        Screen::Groups => " j/k move - Enter select - n next group - q quit",
        Screen::FirstFile => " j/k move - Enter select - Esc back - q quit",
        Screen::SecondFile => " j/k move - Enter compare - Esc back - q quit",
        Screen::Diff => " j/k scroll - g/G top/bottom - Esc back - q quit",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
