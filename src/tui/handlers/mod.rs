//! Input handler modules for different TUI contexts.

pub mod main;
pub mod popups;

// Re-export handler functions
pub use main::handle_main_input;
pub use popups::handle_popup_input;

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::AppState;

/// Top-level key dispatch: popups first, then the focused pane.
///
/// Returns `Ok(true)` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.active_popup.is_some() {
        handle_popup_input(state, key)
    } else {
        handle_main_input(state, key)
    }
}
