//! Key handlers for the editor and preview panes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::{AppState, Focus};

/// Handles a key event outside any popup.
///
/// Returns `Ok(true)` when the application should quit.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let quit_requested = matches!(
        (state.focus, key.code, key.modifiers.contains(KeyModifiers::CONTROL)),
        (_, KeyCode::Char('q'), true) | (Focus::Preview, KeyCode::Char('q'), false)
    );

    if quit_requested {
        // Unsaved drafts need a second press to confirm
        if state.dirty && state.source_path.is_some() && !state.quit_armed {
            state.quit_armed = true;
            state.set_status("Unsaved changes - press quit again to discard, Ctrl+S to save");
            return Ok(false);
        }
        return Ok(true);
    }
    state.quit_armed = false;

    match state.focus {
        Focus::Editor => handle_editor_input(state, key),
        Focus::Preview => handle_preview_input(state, key),
    }
}

/// Editor pane: typing mutates the draft; commands ride on Ctrl.
fn handle_editor_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => state.save_draft(),
            KeyCode::Char('f') => state.apply_auto_spacing(),
            KeyCode::Char('y') => state.copy_post_text(),
            KeyCode::Char('e') => state.start_export(None),
            KeyCode::Char('d') => state.cycle_device(),
            KeyCode::Char('t') => state.toggle_theme(),
            KeyCode::Char('l') => state.load_sample(),
            KeyCode::Char('x') => state.clear_post(),
            KeyCode::Char('p') => state.open_identity_editor(),
            KeyCode::Char('g') => state.open_image_prompt(),
            KeyCode::Char('o') => state.open_document_prompt(),
            KeyCode::Char('r') => state.remove_media(),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::F(1) => state.open_help_overlay(),
        KeyCode::Tab => state.focus = Focus::Preview,

        // Cursor movement leaves the draft untouched
        KeyCode::Left => state.editor.move_left(),
        KeyCode::Right => state.editor.move_right(),
        KeyCode::Up => state.editor.move_up(),
        KeyCode::Down => state.editor.move_down(),
        KeyCode::Home => state.editor.move_home(),
        KeyCode::End => state.editor.move_end(),

        // Mutations recompute derived state before the next render
        KeyCode::Char(c) => {
            state.editor.insert_char(c);
            state.on_text_changed();
        }
        KeyCode::Enter => {
            state.editor.insert_newline();
            state.on_text_changed();
        }
        KeyCode::Backspace => {
            state.editor.backspace();
            state.on_text_changed();
        }
        KeyCode::Delete => {
            state.editor.delete();
            state.on_text_changed();
        }
        _ => {}
    }

    Ok(false)
}

/// Preview pane: single-key actions on the rendered card.
fn handle_preview_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Tab => state.focus = Focus::Editor,
        KeyCode::Enter => state.toggle_expand(),
        KeyCode::Left => state.document_prev_page(),
        KeyCode::Right => state.document_next_page(),
        KeyCode::Char('r') => state.open_document_title_prompt(),
        KeyCode::Char('x') => state.remove_last_image(),
        KeyCode::Char('d') => state.cycle_device(),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('c') => state.copy_post_text(),
        KeyCode::Char('e') => state.start_export(None),
        KeyCode::Char('?') | KeyCode::F(1) => state.open_help_overlay(),
        _ => {}
    }

    Ok(false)
}
