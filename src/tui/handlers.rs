//! Keyboard event routing for the main view and active components.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::models::{ImageRow, VariantRow};
use crate::tui::component::{ColorPickerContext, Component, ComponentEvent};
use crate::tui::{ActiveComponent, AppState, PaneFocus, PopupType};

/// Handle a key event. Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // An error overlay swallows the next key press
    if state.error_message.is_some() {
        state.clear_error();
        return Ok(false);
    }

    if state.active_popup == Some(PopupType::UnsavedChangesPrompt) {
        return Ok(handle_unsaved_prompt(state, key));
    }

    // Route to the active component first
    if state.active_component.is_some() {
        let event = dispatch_to_component(state, key);
        if let Some(event) = event {
            apply_component_event(state, event);
        }
        return Ok(false);
    }

    handle_main_keys(state, key)
}

/// Confirm or dismiss the quit prompt.
fn handle_unsaved_prompt(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => true,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            state.active_popup = None;
            state.set_status("Press 's' to save");
            false
        }
        _ => false,
    }
}

/// Forward the key to whichever component is active.
fn dispatch_to_component(state: &mut AppState, key: KeyEvent) -> Option<ComponentEvent> {
    match state.active_component.as_mut()? {
        ActiveComponent::ColorPicker(picker) => picker.handle_input(key),
        ActiveComponent::VariantEditor(editor) => editor.handle_input(key),
        ActiveComponent::ImageEditor(editor) => editor.handle_input(key),
        ActiveComponent::HelpOverlay(help) => help.handle_input(key),
    }
}

/// Apply an event emitted by the active component to application state.
fn apply_component_event(state: &mut AppState, event: ComponentEvent) {
    match event {
        ComponentEvent::ColorSelected(color_id) => {
            let context = picker_context(state);
            state.close_component();
            match context {
                Some(ColorPickerContext::VariantRow) => {
                    if let Some(row) = state.draft.variants.get_mut(state.selected_variant) {
                        row.color_id = Some(color_id.clone());
                        state.mark_dirty();
                        let name = state.catalog.display_name(&color_id).to_string();
                        state.set_status(format!("Set variant color to '{name}'"));
                        state.resync();
                    }
                }
                Some(ColorPickerContext::ImageRow) => {
                    // The picker only lets enabled (available) colors through
                    if let Some(row) = state.draft.images.get_mut(state.selected_image) {
                        row.color_id = Some(color_id.clone());
                        state.mark_dirty();
                        let name = state.catalog.display_name(&color_id).to_string();
                        state.set_status(format!("Tagged image with '{name}'"));
                    }
                }
                None => state.set_error("No color picker context"),
            }
        }
        ComponentEvent::ColorCleared => {
            let context = picker_context(state);
            state.close_component();
            match context {
                Some(ColorPickerContext::VariantRow) => {
                    if let Some(row) = state.draft.variants.get_mut(state.selected_variant) {
                        row.color_id = None;
                        state.mark_dirty();
                        state.set_status("Cleared variant color");
                        state.resync();
                    }
                }
                Some(ColorPickerContext::ImageRow) => {
                    if let Some(row) = state.draft.images.get_mut(state.selected_image) {
                        row.color_id = None;
                        state.mark_dirty();
                        state.set_status("Cleared image color tag");
                    }
                }
                None => state.set_error("No color picker context"),
            }
        }
        ComponentEvent::VariantApplied(row) => {
            state.close_component();
            if let Some(slot) = state.draft.variants.get_mut(state.selected_variant) {
                *slot = row;
                state.mark_dirty();
                state.set_status("Updated variant");
                state.resync();
            }
        }
        ComponentEvent::ImageApplied(row) => {
            state.close_component();
            if let Some(slot) = state.draft.images.get_mut(state.selected_image) {
                *slot = row;
                state.mark_dirty();
                state.set_status("Updated image");
            }
        }
        ComponentEvent::Cancelled => {
            state.close_component();
            state.set_status("Cancelled");
        }
        ComponentEvent::Closed => {
            state.close_component();
        }
    }
}

/// The row group the open color picker is bound to.
fn picker_context(state: &AppState) -> Option<ColorPickerContext> {
    match &state.active_component {
        Some(ActiveComponent::ColorPicker(picker)) => Some(picker.context()),
        _ => None,
    }
}

/// Handle keys in the main two-pane view.
fn handle_main_keys(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            if state.dirty {
                state.active_popup = Some(PopupType::UnsavedChangesPrompt);
                return Ok(false);
            }
            return Ok(true);
        }
        KeyCode::Char('?') => state.open_help_overlay(),
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = state.focus.toggled();
        }
        KeyCode::Up | KeyCode::Char('k') => move_selection(state, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(state, 1),
        KeyCode::Char('a') => add_row(state),
        KeyCode::Char('d') | KeyCode::Delete => remove_row(state),
        KeyCode::Char('c') => state.open_color_picker(),
        KeyCode::Enter => state.open_row_editor(),
        KeyCode::Char('p') => {
            if state.focus == PaneFocus::Images {
                if state.selected_image_row().is_some() {
                    state.draft.set_primary_image(state.selected_image);
                    state.mark_dirty();
                    state.set_status("Marked image as primary");
                } else {
                    state.set_status("No image selected");
                }
            }
        }
        KeyCode::Char('s') => state.save(),
        _ => {}
    }

    Ok(false)
}

/// Move the focused pane's row selection by `delta`, clamped.
fn move_selection(state: &mut AppState, delta: i64) {
    let (selected, len) = match state.focus {
        PaneFocus::Variants => (&mut state.selected_variant, state.draft.variants.len()),
        PaneFocus::Images => (&mut state.selected_image, state.draft.images.len()),
    };

    if len == 0 {
        return;
    }

    let current = i64::try_from(*selected).unwrap_or(0);
    let max = i64::try_from(len - 1).unwrap_or(0);
    *selected = usize::try_from((current + delta).clamp(0, max)).unwrap_or(0);
}

/// Add an empty row to the focused group and select it.
fn add_row(state: &mut AppState) {
    match state.focus {
        PaneFocus::Variants => {
            let index = state.draft.add_variant(VariantRow::new(""));
            state.selected_variant = index;
            state.mark_dirty();
            state.set_status("Added variant row");
            state.resync();
        }
        PaneFocus::Images => {
            let index = state.draft.add_image(ImageRow::new(""));
            state.selected_image = index;
            state.mark_dirty();
            state.set_status("Added image row");
        }
    }
}

/// Remove the selected row from the focused group.
fn remove_row(state: &mut AppState) {
    match state.focus {
        PaneFocus::Variants => {
            if state.draft.remove_variant(state.selected_variant).is_some() {
                state.mark_dirty();
                state.set_status("Removed variant row");
                state.clamp_selections();
                state.resync();
            }
        }
        PaneFocus::Images => {
            if state.draft.remove_image(state.selected_image).is_some() {
                state.mark_dirty();
                state.set_status("Removed image row");
                state.clamp_selections();
            }
        }
    }
}
