//! Variant row editor form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::VariantRow;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Fields in the variant editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariantField {
    Size,
    Stock,
    Sku,
    Status,
}

/// Variant editor component.
///
/// Edits the non-color fields of one variant row; the color selection goes
/// through the color picker so availability stays in one place.
#[derive(Debug, Clone)]
pub struct VariantEditor {
    row: VariantRow,
    active_field: VariantField,
    stock_input: String,
}

impl VariantEditor {
    /// Creates an editor pre-filled from the given row.
    #[must_use]
    pub fn new(row: &VariantRow) -> Self {
        Self {
            row: row.clone(),
            active_field: VariantField::Size,
            stock_input: row.stock_quantity.to_string(),
        }
    }

    /// Move to the next field.
    const fn next_field(&mut self) {
        self.active_field = match self.active_field {
            VariantField::Size => VariantField::Stock,
            VariantField::Stock => VariantField::Sku,
            VariantField::Sku => VariantField::Status,
            VariantField::Status => VariantField::Size,
        };
    }

    /// Move to the previous field.
    const fn previous_field(&mut self) {
        self.active_field = match self.active_field {
            VariantField::Size => VariantField::Status,
            VariantField::Stock => VariantField::Size,
            VariantField::Sku => VariantField::Stock,
            VariantField::Status => VariantField::Sku,
        };
    }

    /// Append a character to the active text field.
    fn push_char(&mut self, c: char) {
        match self.active_field {
            VariantField::Size => self.row.size.push(c),
            VariantField::Stock => {
                // Stock is numeric; cap well below u32::MAX
                if c.is_ascii_digit() && self.stock_input.len() < 7 {
                    self.stock_input.push(c);
                }
            }
            VariantField::Sku => self.row.sku.get_or_insert_with(String::new).push(c),
            VariantField::Status => {}
        }
    }

    /// Remove the last character of the active text field.
    fn pop_char(&mut self) {
        match self.active_field {
            VariantField::Size => {
                self.row.size.pop();
            }
            VariantField::Stock => {
                self.stock_input.pop();
            }
            VariantField::Sku => {
                if let Some(sku) = &mut self.row.sku {
                    sku.pop();
                    if sku.is_empty() {
                        self.row.sku = None;
                    }
                }
            }
            VariantField::Status => {}
        }
    }

    /// Build the resulting row from the form state.
    fn finish(&self) -> VariantRow {
        let mut row = self.row.clone();
        row.stock_quantity = self.stock_input.parse().unwrap_or(0);
        row
    }

    fn field_line<'a>(
        &self,
        label: &'a str,
        value: String,
        field: VariantField,
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
        let value_style = Style::default().fg(theme.text);

        let mut spans = vec![
            Span::styled(format!(" {label:<8}"), label_style),
            Span::styled(value, value_style),
        ];
        if is_active && field != VariantField::Status {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    }
}

impl Component for VariantEditor {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => Some(ComponentEvent::VariantApplied(self.finish())),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Char(' ') if self.active_field == VariantField::Status => {
                self.row.status = self.row.status.toggled();
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
        let area = centered_rect(50, 45, area);

        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Size
                Constraint::Length(1), // Stock
                Constraint::Length(1), // SKU
                Constraint::Length(1), // Status
                Constraint::Min(0),    // Spacer
                Constraint::Length(1), // Instructions
            ])
            .split(area);

        let block = Block::default()
            .title(" Edit Variant ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        f.render_widget(block, area);

        f.render_widget(
            Paragraph::new(self.field_line(
                "Size",
                self.row.size.clone(),
                VariantField::Size,
                theme,
            )),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "Stock",
                self.stock_input.clone(),
                VariantField::Stock,
                theme,
            )),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "SKU",
                self.row.sku.clone().unwrap_or_default(),
                VariantField::Sku,
                theme,
            )),
            chunks[2],
        );
        f.render_widget(
            Paragraph::new(self.field_line(
                "Status",
                format!("{} (Space toggles)", self.row.status.label()),
                VariantField::Status,
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
