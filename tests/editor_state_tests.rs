//! Integration tests for editor state: synchronization triggers, picker
//! availability, and the guarded save, driven through the key handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use lazycatalog::config::Config;
use lazycatalog::models::{ImageRow, VariantRow};
use lazycatalog::tui::handlers::handle_key_event;
use lazycatalog::tui::{AppState, PaneFocus, PopupType};

mod fixtures;
use fixtures::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn state_for(draft: lazycatalog::models::ProductDraft) -> AppState {
    AppState::new(draft, None, Config::default()).expect("AppState should build")
}

#[test]
fn test_sync_runs_at_load() {
    // A draft with a stale tag is cleaned up when opened
    let state = state_for(test_draft_with_stale_tag());

    assert!(state.draft.images[0].color_id.is_none());
    assert!(state.dirty, "clearing at load leaves unsaved changes");
    assert!(state.last_sync.available.contains("navy"));
    assert!(!state.last_sync.warning);
}

#[test]
fn test_consistent_draft_loads_clean() {
    let state = state_for(test_draft_consistent());
    assert!(!state.dirty);
    assert_eq!(state.last_sync.cleared.len(), 0);
}

#[test]
fn test_warning_flag_for_empty_set() {
    let state = state_for(test_draft_images_without_variants());
    assert!(state.last_sync.warning);
}

#[test]
fn test_selecting_variant_color_through_picker_resyncs() {
    let mut state = state_for(test_draft_empty());

    // Add a variant row and open the color picker for it
    handle_key_event(&mut state, key(KeyCode::Char('a'))).unwrap();
    assert_eq!(state.draft.variants.len(), 1);
    assert!(state.last_sync.warning, "new variant has no color yet");

    handle_key_event(&mut state, key(KeyCode::Char('c'))).unwrap();
    assert_eq!(state.active_popup, Some(PopupType::ColorPicker));

    // First entry in the catalog is 'black'; Enter selects it
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    assert_eq!(
        state.draft.variants[0].color_id.as_deref(),
        Some("black")
    );
    assert!(state.active_popup.is_none());
    assert!(state.last_sync.available.contains("black"));
    assert!(!state.last_sync.warning);
}

#[test]
fn test_image_picker_blocks_unavailable_color() {
    // One variant (navy), one untagged image
    let mut draft = test_draft_empty();
    draft.add_variant(VariantRow::new("M").with_color("navy"));
    draft.add_image(ImageRow::new("front.jpg"));
    let mut state = state_for(draft);

    // Focus images, open the picker
    handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
    assert_eq!(state.focus, PaneFocus::Images);
    handle_key_event(&mut state, key(KeyCode::Char('c'))).unwrap();

    // First entry ('black') is not available; Enter must not tag the image
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    assert!(state.draft.images[0].color_id.is_none());
    assert_eq!(
        state.active_popup,
        Some(PopupType::ColorPicker),
        "picker stays open after a refused selection"
    );
}

#[test]
fn test_removing_variant_clears_dependent_image_tag() {
    let mut draft = test_draft_empty();
    draft.add_variant(VariantRow::new("M").with_color("navy"));
    draft.add_image(ImageRow::new("front.jpg").with_color("navy"));
    let mut state = state_for(draft);
    assert_eq!(state.draft.images[0].color_id.as_deref(), Some("navy"));

    // Delete the only variant; the image tag must be cleared by the resync
    handle_key_event(&mut state, key(KeyCode::Char('d'))).unwrap();

    assert!(state.draft.variants.is_empty());
    assert!(state.draft.images[0].color_id.is_none());
    assert!(state.last_sync.warning);
}

#[test]
fn test_blocked_save_moves_to_first_offending_image() {
    let mut draft = test_draft_empty();
    draft.add_image(ImageRow::new("")); // placeholder, no content
    draft.add_image(ImageRow::new("front.jpg"));
    let mut state = state_for(draft);

    handle_key_event(&mut state, key(KeyCode::Char('s'))).unwrap();

    assert!(state.error_message.is_some(), "save must be blocked");
    assert_eq!(state.focus, PaneFocus::Images);
    assert_eq!(
        state.selected_image, 1,
        "selection jumps to the first image with content"
    );
}

#[test]
fn test_save_writes_file_when_guard_passes() {
    let (path, _temp_dir) = create_temp_draft_file(&test_draft_consistent());
    let draft = lazycatalog::services::DraftService::load(&path).unwrap();
    let mut state = AppState::new(draft, Some(path.clone()), Config::default()).unwrap();

    // Make a change, then save
    handle_key_event(&mut state, key(KeyCode::Char('a'))).unwrap();
    assert!(state.dirty);
    handle_key_event(&mut state, key(KeyCode::Char('s'))).unwrap();

    assert!(state.error_message.is_none());
    assert!(!state.dirty);
    let on_disk = lazycatalog::services::DraftService::load(&path).unwrap();
    assert_eq!(on_disk.variants.len(), 3);
}

#[test]
fn test_quit_with_unsaved_changes_prompts() {
    let mut state = state_for(test_draft_consistent());

    handle_key_event(&mut state, key(KeyCode::Char('a'))).unwrap();
    assert!(state.dirty);

    let quit = handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
    assert!(!quit);
    assert_eq!(state.active_popup, Some(PopupType::UnsavedChangesPrompt));

    // 'n' keeps editing
    let quit = handle_key_event(&mut state, key(KeyCode::Char('n'))).unwrap();
    assert!(!quit);
    assert!(state.active_popup.is_none());

    // 'q' then 'y' quits
    handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
    let quit = handle_key_event(&mut state, key(KeyCode::Char('y'))).unwrap();
    assert!(quit);
}

#[test]
fn test_quit_clean_exits_immediately() {
    let mut state = state_for(test_draft_consistent());
    let quit = handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
    assert!(quit);
}

#[test]
fn test_primary_flag_is_exclusive() {
    let mut state = state_for(test_draft_consistent());

    // Focus images, select the second row, mark it primary
    handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
    handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
    handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();

    assert!(!state.draft.images[0].is_primary);
    assert!(state.draft.images[1].is_primary);
}
