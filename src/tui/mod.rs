//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod color_picker;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod image_editor;
pub mod status_bar;
pub mod theme;
pub mod variant_editor;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ColorCatalog, ImageRow, ProductDraft, VariantRow};
use crate::services::DraftService;
use crate::sync::{self, SyncOutcome};

// Re-export TUI components
pub use color_picker::ColorPicker;
pub use component::{ColorPickerContext, Component, ComponentEvent};
pub use help_overlay::HelpOverlay;
pub use image_editor::ImageEditor;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use variant_editor::VariantEditor;

use handlers::handle_key_event;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Color picker popup
    ColorPicker,
    /// Variant editor popup
    VariantEditor,
    /// Image editor popup
    ImageEditor,
    /// Help overlay popup
    HelpOverlay,
    /// Unsaved changes confirmation popup
    UnsavedChangesPrompt,
}

/// Which row group currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    /// The variant rows pane
    #[default]
    Variants,
    /// The image rows pane
    Images,
}

impl PaneFocus {
    /// The other pane.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Variants => Self::Images,
            Self::Images => Self::Variants,
        }
    }
}

/// Active component - holds the currently active popup component
///
/// This enum wraps all component types that implement the Component trait.
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Color picker component
    ColorPicker(ColorPicker),
    /// Variant editor component
    VariantEditor(VariantEditor),
    /// Image editor component
    ImageEditor(ImageEditor),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// The draft being edited
    pub draft: ProductDraft,
    /// Path to the draft file
    pub source_path: Option<PathBuf>,
    /// Whether the draft has unsaved changes
    pub dirty: bool,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Which pane has focus
    pub focus: PaneFocus,
    /// Selected row index in the variants pane
    pub selected_variant: usize,
    /// Selected row index in the images pane
    pub selected_image: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// The color catalog
    pub catalog: ColorCatalog,
    /// Application configuration
    pub config: Config,
    /// Outcome of the most recent synchronization pass
    pub last_sync: SyncOutcome,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from a draft, its path, and config.
    ///
    /// Runs the synchronizer once so the loaded state satisfies the color
    /// availability invariant from the start.
    ///
    /// # Errors
    ///
    /// Returns error if the color catalog fails to load
    pub fn new(draft: ProductDraft, source_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let catalog = ColorCatalog::load().context("Failed to load color catalog")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        let mut state = Self {
            draft,
            source_path,
            dirty: false,
            theme,
            focus: PaneFocus::Variants,
            selected_variant: 0,
            selected_image: 0,
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            catalog,
            config,
            last_sync: SyncOutcome {
                available: sync::AvailableColorSet::default(),
                cleared: Vec::new(),
                warning: true,
            },
            should_quit: false,
        };

        state.resync();
        Ok(state)
    }

    /// Re-runs the synchronizer against the current rows.
    ///
    /// Call after every variant color change and variant row add/remove.
    /// Clearings mark the draft dirty and are reported in the status bar.
    pub fn resync(&mut self) {
        let outcome = sync::recompute(&self.draft.variants, &mut self.draft.images);

        if !outcome.cleared.is_empty() {
            self.mark_dirty();
            let colors: Vec<&str> = outcome
                .cleared
                .iter()
                .map(|c| c.color_id.as_str())
                .collect();
            self.set_status(format!(
                "Cleared {} image color tag(s) no longer used by variants: {}",
                outcome.cleared.len(),
                colors.join(", ")
            ));
        }

        self.last_sync = outcome;
    }

    /// The currently selected variant row, if any.
    #[must_use]
    pub fn selected_variant_row(&self) -> Option<&VariantRow> {
        self.draft.variants.get(self.selected_variant)
    }

    /// The currently selected image row, if any.
    #[must_use]
    pub fn selected_image_row(&self) -> Option<&ImageRow> {
        self.draft.images.get(self.selected_image)
    }

    /// Clamp row selections after rows were removed.
    pub fn clamp_selections(&mut self) {
        if self.selected_variant >= self.draft.variants.len() {
            self.selected_variant = self.draft.variants.len().saturating_sub(1);
        }
        if self.selected_image >= self.draft.images.len() {
            self.selected_image = self.draft.images.len().saturating_sub(1);
        }
    }

    /// Mark draft as dirty (unsaved changes)
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear dirty flag (after save)
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // === Component Management Methods ===

    /// Open the color picker for the focused row.
    ///
    /// The image-row picker restricts enabled options to the available set;
    /// the variant-row picker offers all active catalog colors.
    pub fn open_color_picker(&mut self) {
        let picker = match self.focus {
            PaneFocus::Variants => {
                let Some(row) = self.selected_variant_row() else {
                    self.set_status("No variant selected");
                    return;
                };
                ColorPicker::for_variant(&self.catalog, row.color_id.as_deref())
            }
            PaneFocus::Images => {
                let Some(row) = self.selected_image_row() else {
                    self.set_status("No image selected");
                    return;
                };
                ColorPicker::for_image(
                    &self.catalog,
                    &self.last_sync.available,
                    row.color_id.as_deref(),
                )
            }
        };
        self.active_component = Some(ActiveComponent::ColorPicker(picker));
        self.active_popup = Some(PopupType::ColorPicker);
    }

    /// Open the editor for the focused row.
    pub fn open_row_editor(&mut self) {
        match self.focus {
            PaneFocus::Variants => {
                let Some(row) = self.selected_variant_row() else {
                    self.set_status("No variant selected");
                    return;
                };
                let editor = VariantEditor::new(row);
                self.active_component = Some(ActiveComponent::VariantEditor(editor));
                self.active_popup = Some(PopupType::VariantEditor);
            }
            PaneFocus::Images => {
                let Some(row) = self.selected_image_row() else {
                    self.set_status("No image selected");
                    return;
                };
                let editor = ImageEditor::new(row);
                self.active_component = Some(ActiveComponent::ImageEditor(editor));
                self.active_popup = Some(PopupType::ImageEditor);
            }
        }
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the active component and popup.
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }

    /// Save the draft, enforcing the submission precondition.
    ///
    /// A blocked save moves focus to the first offending image row and
    /// raises the error overlay instead of writing anything.
    pub fn save(&mut self) {
        if let Err(blocked) = sync::check_save(&self.draft) {
            self.focus = PaneFocus::Images;
            self.selected_image = blocked.first_image_index;
            self.set_error(blocked.to_string());
            return;
        }

        let Some(path) = self.source_path.clone() else {
            self.set_error("Draft has no file path");
            return;
        };

        self.draft.touch();
        match DraftService::save(&self.draft, &path) {
            Ok(()) => {
                self.mark_clean();
                self.set_status(format!("Saved to {}", path.display()));
            }
            Err(e) => self.set_error(format!("Save failed: {e:#}")),
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(popup_type) = state.active_popup {
        render_popup(f, popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with product name and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let dirty_indicator = if state.dirty { " *" } else { "" };
    let title = format!(" {}{}", state.draft.metadata.name, dirty_indicator);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the two row-group panes side by side
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_variants_pane(f, panes[0], state);
    render_images_pane(f, panes[1], state);
}

/// Border style for a pane depending on focus
fn pane_border_style(state: &AppState, pane: PaneFocus) -> Style {
    if state.focus == pane && state.active_popup.is_none() {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.primary)
    }
}

/// Swatch span for a color id, or a neutral placeholder when unselected
fn swatch_span(state: &AppState, color_id: Option<&str>) -> Span<'static> {
    let theme = &state.theme;
    match color_id {
        Some(id) => {
            let color = state
                .catalog
                .by_id(id)
                .and_then(crate::models::ColorChoice::swatch_color)
                .map_or(theme.text_secondary, |s| s.to_ratatui_color());
            Span::styled("●", Style::default().fg(color))
        }
        None => Span::styled("○", Style::default().fg(theme.text_muted)),
    }
}

/// Render the variants pane
fn render_variants_pane(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .title(" Variants ")
        .borders(Borders::ALL)
        .border_style(pane_border_style(state, PaneFocus::Variants))
        .style(Style::default().bg(theme.background));

    if state.draft.variants.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " (no variants - press 'a' to add) ",
            Style::default().fg(theme.text_muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .draft
        .variants
        .iter()
        .map(|row| {
            let color_name = row
                .color_id
                .as_deref()
                .map_or("-", |id| state.catalog.display_name(id));
            let sku = row.sku.as_deref().unwrap_or("-");

            let line = Line::from(vec![
                Span::raw(" "),
                swatch_span(state, row.color_id.as_deref()),
                Span::raw(" "),
                Span::styled(
                    format!("{color_name:<14}"),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<10}", row.size),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    format!("x{:<6}", row.stock_quantity),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(format!("{sku:<12}"), Style::default().fg(theme.text_muted)),
                Span::styled(
                    row.status.label(),
                    Style::default().fg(theme.text_muted),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_variant));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the images pane, with the availability warning banner when the
/// available color set is empty
fn render_images_pane(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let block = Block::default()
        .title(" Images ")
        .borders(Borders::ALL)
        .border_style(pane_border_style(state, PaneFocus::Images))
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // The single persistent warning indicator attached to this pane
    let list_area = if state.last_sync.warning {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let banner = Paragraph::new(Line::from(Span::styled(
            "⚠ No variant colors selected - image color tags are unavailable",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true });
        f.render_widget(banner, rows[0]);
        rows[1]
    } else {
        inner
    };

    if state.draft.images.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " (no images - press 'a' to add) ",
            Style::default().fg(theme.text_muted),
        )));
        f.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = state
        .draft
        .images
        .iter()
        .map(|row| {
            let color_name = row
                .color_id
                .as_deref()
                .map_or("-", |id| state.catalog.display_name(id));
            let primary = if row.is_primary { "[P]" } else { "   " };

            let line = Line::from(vec![
                Span::raw(" "),
                swatch_span(state, row.color_id.as_deref()),
                Span::raw(" "),
                Span::styled(
                    format!("{color_name:<14}"),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<20}", row.file),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(primary, Style::default().fg(theme.accent)),
                Span::styled(
                    format!(" #{}", row.display_order),
                    Style::default().fg(theme.text_muted),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_image));
    f.render_stateful_widget(list, list_area, &mut list_state);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: PopupType, state: &AppState) {
    match popup_type {
        PopupType::ColorPicker => {
            if let Some(ActiveComponent::ColorPicker(ref picker)) = state.active_component {
                picker.render(f, f.area(), &state.theme);
            }
        }
        PopupType::VariantEditor => {
            if let Some(ActiveComponent::VariantEditor(ref editor)) = state.active_component {
                editor.render(f, f.area(), &state.theme);
            }
        }
        PopupType::ImageEditor => {
            if let Some(ActiveComponent::ImageEditor(ref editor)) = state.active_component {
                editor.render(f, f.area(), &state.theme);
            }
        }
        PopupType::HelpOverlay => {
            if let Some(ActiveComponent::HelpOverlay(ref help)) = state.active_component {
                help.render(f, f.area(), &state.theme);
            }
        }
        PopupType::UnsavedChangesPrompt => {
            render_unsaved_prompt(f, &state.theme);
        }
    }
}

/// Render the unsaved-changes confirmation prompt
fn render_unsaved_prompt(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(40, 20, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Unsaved changes!",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Quit without saving? "),
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::raw(" / "),
            Span::styled("n", Style::default().fg(theme.accent)),
        ]),
    ];

    let prompt = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning)),
    );
    f.render_widget(prompt, area);
}

/// Render error message overlay
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 25, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to continue",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let overlay = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error)),
    );
    f.render_widget(overlay, area);
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
