//! Image row editor form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ImageRow;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Fields in the image editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageField {
    File,
    AltText,
    Order,
    Primary,
}

/// Image editor component.
///
/// Edits the non-color fields of one image row; the color tag goes through
/// the color picker, which enforces availability.
#[derive(Debug, Clone)]
pub struct ImageEditor {
    row: ImageRow,
    active_field: ImageField,
    order_input: String,
}

impl ImageEditor {
    /// Creates an editor pre-filled from the given row.
    #[must_use]
    pub fn new(row: &ImageRow) -> Self {
        Self {
            row: row.clone(),
            active_field: ImageField::File,
            order_input: row.display_order.to_string(),
        }
    }

    /// Move to the next field.
    const fn next_field(&mut self) {
        self.active_field = match self.active_field {
            ImageField::File => ImageField::AltText,
            ImageField::AltText => ImageField::Order,
            ImageField::Order => ImageField::Primary,
            ImageField::Primary => ImageField::File,
        };
    }

    /// Move to the previous field.
    const fn previous_field(&mut self) {
        self.active_field = match self.active_field {
            ImageField::File => ImageField::Primary,
            ImageField::AltText => ImageField::File,
            ImageField::Order => ImageField::AltText,
            ImageField::Primary => ImageField::Order,
        };
    }

    /// Append a character to the active text field.
    fn push_char(&mut self, c: char) {
        match self.active_field {
            ImageField::File => self.row.file.push(c),
            ImageField::AltText => self.row.alt_text.push(c),
            ImageField::Order => {
                if c.is_ascii_digit() && self.order_input.len() < 4 {
                    self.order_input.push(c);
                }
            }
            ImageField::Primary => {}
        }
    }

    /// Remove the last character of the active text field.
    fn pop_char(&mut self) {
        match self.active_field {
            ImageField::File => {
                self.row.file.pop();
            }
            ImageField::AltText => {
                self.row.alt_text.pop();
            }
            ImageField::Order => {
                self.order_input.pop();
            }
            ImageField::Primary => {}
        }
    }

    /// Build the resulting row from the form state.
    fn finish(&self) -> ImageRow {
        let mut row = self.row.clone();
        row.display_order = self.order_input.parse().unwrap_or(0);
        row
    }

    fn field_line<'a>(
        &self,
        label: &'a str,
        value: String,
        field: ImageField,
        theme: &Theme,
    ) -> Line<'a> {
        let is_active = self.active_field == field;
        let label_style = if is_active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut spans = vec![
            Span::styled(format!(" {label:<9}"), label_style),
            Span::styled(value, Style::default().fg(theme.text)),
        ];
        if is_active && field != ImageField::Primary {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    }
}

impl Component for ImageEditor {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => Some(ComponentEvent::ImageApplied(self.finish())),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Char(' ') if self.active_field == ImageField::Primary => {
                self.row.is_primary = !self.row.is_primary;
                None
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                None
            }
            KeyCode::Backspace => {
                self.pop_char();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(55, 45, area);

        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // File
                Constraint::Length(1), // Alt text
                Constraint::Length(1), // Order
                Constraint::Length(1), // Primary
                Constraint::Min(0),    // Spacer
                Constraint::Length(1), // Instructions
            ])
            .split(area);

        let block = Block::default()
            .title(" Edit Image ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        f.render_widget(block, area);

        f.render_widget(
            Paragraph::new(self.field_line(
                "File",
                self.row.file.clone(),
                ImageField::File,
                theme,
            )),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "Alt text",
                self.row.alt_text.clone(),
                ImageField::AltText,
                theme,
            )),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "Order",
                self.order_input.clone(),
                ImageField::Order,
                theme,
            )),
            chunks[2],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "Primary",
                format!(
                    "{} (Space toggles)",
                    if self.row.is_primary { "yes" } else { "no" }
                ),
                ImageField::Primary,
                theme,
            )),
            chunks[3],
        );

        let instructions = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Next field  "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]));
        f.render_widget(instructions, chunks[5]);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_edit_file_and_apply() {
        let row = ImageRow::new("front.jp");
        let mut editor = ImageEditor::new(&row);

        editor.handle_input(key(KeyCode::Char('g')));
        let event = editor.handle_input(key(KeyCode::Enter));

        match event {
            Some(ComponentEvent::ImageApplied(updated)) => {
                assert_eq!(updated.file, "front.jpg");
                assert_eq!(updated.id, row.id);
            }
            other => panic!("expected ImageApplied, got {other:?}"),
        }
    }

    #[test]
    fn test_primary_toggle() {
        let mut editor = ImageEditor::new(&ImageRow::new("a.jpg"));
        editor.handle_input(key(KeyCode::Tab));
        editor.handle_input(key(KeyCode::Tab));
        editor.handle_input(key(KeyCode::Tab)); // Primary

        editor.handle_input(key(KeyCode::Char(' ')));
        let event = editor.handle_input(key(KeyCode::Enter));
        match event {
            Some(ComponentEvent::ImageApplied(updated)) => assert!(updated.is_primary),
            other => panic!("expected ImageApplied, got {other:?}"),
        }
    }

    #[test]
    fn test_order_numeric_only() {
        let mut editor = ImageEditor::new(&ImageRow::new("a.jpg"));
        editor.handle_input(key(KeyCode::Tab));
        editor.handle_input(key(KeyCode::Tab)); // Order

        // Field starts with the current order ("0"); clear it first
        editor.handle_input(key(KeyCode::Backspace));
        editor.handle_input(key(KeyCode::Char('1')));
        editor.handle_input(key(KeyCode::Char('a')));
        editor.handle_input(key(KeyCode::Char('2')));

        let event = editor.handle_input(key(KeyCode::Enter));
        match event {
            Some(ComponentEvent::ImageApplied(updated)) => {
                assert_eq!(updated.display_order, 12);
            }
            other => panic!("expected ImageApplied, got {other:?}"),
        }
    }

    #[test]
    fn test_color_tag_untouched_by_editor() {
        let row = ImageRow::new("a.jpg").with_color("navy");
        let mut editor = ImageEditor::new(&row);
        editor.handle_input(key(KeyCode::Char('x')));

        let event = editor.handle_input(key(KeyCode::Enter));
        match event {
            Some(ComponentEvent::ImageApplied(updated)) => {
                assert_eq!(updated.color_id.as_deref(), Some("navy"));
            }
            other => panic!("expected ImageApplied, got {other:?}"),
        }
    }
}
