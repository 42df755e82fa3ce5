//! Popup input handlers: delegate to the active component and apply its
//! events to application state.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::component::{Component, ComponentEvent, PromptPurpose};
use crate::tui::{ActivePopup, AppState};

/// Handles a key event while a popup is active.
///
/// Returns `Ok(true)` when the application should quit (never, currently;
/// popups close back into the main UI).
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(popup) = state.active_popup.as_mut() else {
        return Ok(false);
    };

    let event = match popup {
        ActivePopup::IdentityEditor(editor) => editor.handle_input(key),
        ActivePopup::PathPrompt(prompt) => prompt.handle_input(key),
        ActivePopup::HelpOverlay(overlay) => overlay.handle_input(key),
    };

    if let Some(event) = event {
        state.active_popup = None;
        apply_event(state, event);
    }

    Ok(false)
}

/// Applies a component event to application state.
fn apply_event(state: &mut AppState, event: ComponentEvent) {
    match event {
        ComponentEvent::IdentitySaved {
            name,
            headline,
            photo,
            override_enabled,
        } => {
            state.settings.author_name = name;
            state.settings.author_headline = headline;
            state.settings.use_profile_override = override_enabled;
            state.settings.set_custom_photo(photo);
            // Write-through persistence on every identity change
            match state.settings.save() {
                Ok(()) => state.set_status("Profile saved"),
                Err(e) => state.set_error(format!("Failed to save profile: {e:#}")),
            }
        }

        ComponentEvent::PathsSubmitted { purpose, values } => match purpose {
            PromptPurpose::Images => state.attach_images(values),
            PromptPurpose::Document => {
                if let Some(path) = values.into_iter().next() {
                    state.attach_document(path.into());
                }
            }
            PromptPurpose::DocumentTitle => {
                if let Some(title) = values.into_iter().next() {
                    if let Some(doc) = state.media.document_mut() {
                        doc.title = title;
                        state.set_status("Document renamed");
                    }
                }
            }
        },

        ComponentEvent::Cancelled => state.set_status("Cancelled"),
        ComponentEvent::Closed => state.clear_status(),
    }
}
