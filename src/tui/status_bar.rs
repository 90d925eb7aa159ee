//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PaneFocus, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or summary
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(state.status_message.clone()));
        } else {
            content_lines.push(Self::summary_line(state, theme));
        }

        // Help line at the bottom
        let help_line = Self::contextual_help_line(state, theme);

        // Pad to push help to the bottom (3 content rows inside the borders)
        const MAX_CONTENT_LINES: usize = 2;
        let mut status_text: Vec<Line> = Vec::new();
        for line in content_lines.into_iter().take(MAX_CONTENT_LINES) {
            status_text.push(line);
        }
        while status_text.len() < MAX_CONTENT_LINES {
            status_text.push(Line::from(""));
        }
        status_text.push(help_line);

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Summary of the draft: row counts and available colors.
    fn summary_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let available: Vec<&str> = state.last_sync.available.iter().collect();
        let colors = if available.is_empty() {
            "(none)".to_string()
        } else {
            available.join(", ")
        };

        Line::from(vec![
            Span::styled("Variants: ", Style::default().fg(theme.primary)),
            Span::raw(state.draft.variants.len().to_string()),
            Span::raw("  "),
            Span::styled("Images: ", Style::default().fg(theme.primary)),
            Span::raw(state.draft.images.len().to_string()),
            Span::raw("  "),
            Span::styled("Colors in use: ", Style::default().fg(theme.primary)),
            Span::styled(colors, Style::default().fg(theme.text_secondary)),
        ])
    }

    /// Contextual key hints, depending on the active popup or pane.
    fn contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match &state.active_popup {
            Some(PopupType::ColorPicker) => &[
                ("↑↓", "Navigate"),
                ("Enter", "Select"),
                ("x", "Clear"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::VariantEditor | PopupType::ImageEditor) => &[
                ("Tab", "Field"),
                ("Enter", "Apply"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::HelpOverlay) => &[("Esc", "Close")],
            Some(PopupType::UnsavedChangesPrompt) => &[
                ("y", "Quit without saving"),
                ("n", "Keep editing"),
            ],
            None => match state.focus {
                PaneFocus::Variants => &[
                    ("Tab", "Images"),
                    ("a", "Add"),
                    ("d", "Delete"),
                    ("c", "Color"),
                    ("Enter", "Edit"),
                    ("s", "Save"),
                    ("?", "Help"),
                ],
                PaneFocus::Images => &[
                    ("Tab", "Variants"),
                    ("a", "Add"),
                    ("d", "Delete"),
                    ("c", "Color tag"),
                    ("p", "Primary"),
                    ("s", "Save"),
                    ("?", "Help"),
                ],
            },
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (keys, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*keys).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
