//! Help overlay showing the key reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Key binding entry shown in the overlay.
struct HelpEntry {
    keys: &'static str,
    action: &'static str,
}

const MAIN_BINDINGS: &[HelpEntry] = &[
    HelpEntry { keys: "Tab", action: "Switch between Variants and Images" },
    HelpEntry { keys: "↑/↓, j/k", action: "Select row" },
    HelpEntry { keys: "a", action: "Add row to focused group" },
    HelpEntry { keys: "d", action: "Delete selected row" },
    HelpEntry { keys: "c", action: "Pick color for selected row" },
    HelpEntry { keys: "Enter", action: "Edit selected row" },
    HelpEntry { keys: "p", action: "Mark selected image as primary" },
    HelpEntry { keys: "s", action: "Save draft" },
    HelpEntry { keys: "?", action: "Toggle this help" },
    HelpEntry { keys: "q", action: "Quit" },
];

/// Help overlay component.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    /// Creates the overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(50, 60, area);

        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        f.render_widget(block, area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Min(1)])
            .split(area)[0];

        let mut lines: Vec<Line> = MAIN_BINDINGS
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<10}", entry.keys),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.action, Style::default().fg(theme.text)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Press Esc to close",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
