//! Color picker dialog for selecting catalog colors.
//!
//! Two flavors share one component:
//! - Variant mode: every active catalog color can be selected
//! - Image mode: colors outside the available set are shown muted and
//!   cannot be selected

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{ColorCatalog, SwatchColor};
use crate::sync::AvailableColorSet;
use crate::tui::component::{ColorPickerContext, Component, ComponentEvent};
use crate::tui::Theme;

/// One selectable entry in the picker list.
#[derive(Debug, Clone)]
struct PickerEntry {
    id: String,
    name: String,
    swatch: Option<SwatchColor>,
    enabled: bool,
}

/// Color picker component.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    context: ColorPickerContext,
    entries: Vec<PickerEntry>,
    /// Index into entries, or `entries.len()` for the trailing "None" option
    selected: usize,
    list_state: ListState,
    /// One-line notice shown after an attempt to pick a disabled entry
    notice: Option<String>,
}

impl ColorPicker {
    /// Creates a picker for a variant row: all active colors enabled.
    #[must_use]
    pub fn for_variant(catalog: &ColorCatalog, current: Option<&str>) -> Self {
        let entries = catalog
            .active_colors()
            .map(|choice| PickerEntry {
                id: choice.id.clone(),
                name: choice.name.clone(),
                swatch: choice.swatch_color(),
                enabled: true,
            })
            .collect();
        Self::new(ColorPickerContext::VariantRow, entries, current)
    }

    /// Creates a picker for an image row: enabled iff in the available set.
    #[must_use]
    pub fn for_image(
        catalog: &ColorCatalog,
        available: &AvailableColorSet,
        current: Option<&str>,
    ) -> Self {
        let entries = crate::sync::color_options(catalog, available)
            .into_iter()
            .map(|option| PickerEntry {
                id: option.choice.id.clone(),
                name: option.choice.name.clone(),
                swatch: option.choice.swatch_color(),
                enabled: option.enabled,
            })
            .collect();
        Self::new(ColorPickerContext::ImageRow, entries, current)
    }

    fn new(
        context: ColorPickerContext,
        entries: Vec<PickerEntry>,
        current: Option<&str>,
    ) -> Self {
        // Start on the current selection when it is still offered
        let selected = current
            .and_then(|id| entries.iter().position(|e| e.id == id))
            .unwrap_or(0);

        let mut list_state = ListState::default();
        list_state.select(Some(selected));

        Self {
            context,
            entries,
            selected,
            list_state,
            notice: None,
        }
    }

    /// The row group this picker is modifying.
    #[must_use]
    pub const fn context(&self) -> ColorPickerContext {
        self.context
    }

    /// Number of list rows including the trailing "None" option.
    fn item_count(&self) -> usize {
        self.entries.len() + 1
    }

    /// Move selection up, wrapping at the top.
    fn previous(&mut self) {
        self.notice = None;
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.item_count() - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down, wrapping at the bottom.
    fn next(&mut self) {
        self.notice = None;
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Resolve the current selection into an event.
    fn confirm(&mut self) -> Option<ComponentEvent> {
        if self.selected >= self.entries.len() {
            return Some(ComponentEvent::ColorCleared);
        }

        let entry = &self.entries[self.selected];
        if entry.enabled {
            Some(ComponentEvent::ColorSelected(entry.id.clone()))
        } else {
            self.notice = Some(format!(
                "'{}' is not used by any variant",
                entry.name
            ));
            None
        }
    }
}

impl Component for ColorPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => self.confirm(),
            KeyCode::Char('x') | KeyCode::Delete => Some(ComponentEvent::ColorCleared),
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(50, 70, area);

        // Clear the background area first
        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let title = match self.context {
            ColorPickerContext::VariantRow => " Variant Color ",
            ColorPickerContext::ImageRow => " Image Color Tag ",
        };

        let mut items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let dot_color = entry.swatch.map_or(theme.text_muted, |s| {
                    if entry.enabled {
                        s.to_ratatui_color()
                    } else {
                        s.dim(40).to_ratatui_color()
                    }
                });
                let name_style = if entry.enabled {
                    Style::default().fg(theme.text)
                } else {
                    Style::default().fg(theme.text_muted)
                };

                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled("●", Style::default().fg(dot_color)),
                    Span::raw("  "),
                    Span::styled(entry.name.clone(), name_style),
                ];
                if !entry.enabled {
                    spans.push(Span::styled(
                        "  (unavailable)",
                        Style::default()
                            .fg(theme.text_muted)
                            .add_modifier(Modifier::ITALIC),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        // Trailing "None" option clears the selection
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "[ None ]",
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])));

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, area, &mut list_state);

        // Notice or instructions at the bottom
        let footer_area = Rect {
            x: area.x + 2,
            y: area.y + area.height.saturating_sub(2),
            width: area.width.saturating_sub(4),
            height: 1,
        };

        if let Some(notice) = &self.notice {
            let footer = Paragraph::new(Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(theme.warning),
            )));
            f.render_widget(footer, footer_area);
        } else {
            let footer = Paragraph::new(Line::from(vec![
                Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Navigate  "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Select  "),
                Span::styled("x", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Clear  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Cancel"),
            ]));
            f.render_widget(footer, footer_area);
        }
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
