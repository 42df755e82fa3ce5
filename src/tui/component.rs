//! Component trait pattern for TUI popups.
//!
//! This module defines the trait and event types used to implement
//! self-contained, testable popup components that handle their own input
//! and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally without
    /// needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component.
    ///
    /// The component should render itself within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// What a path prompt is collecting paths for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Image attachments (up to the image cap, image extensions only)
    Images,
    /// A single document attachment (.pdf)
    Document,
    /// Rename the attached document (free text, not a path)
    DocumentTitle,
}

/// Events emitted by popup components and processed by the parent.
#[derive(Debug, Clone)]
pub enum ComponentEvent {
    /// Identity editor saved its fields
    IdentitySaved {
        /// Author display name override
        name: String,
        /// Author headline override
        headline: String,
        /// Custom profile photo reference
        photo: Option<PathBuf>,
        /// Whether the override identity is active
        override_enabled: bool,
    },

    /// Path prompt submitted one or more values
    PathsSubmitted {
        /// What the paths are for
        purpose: PromptPurpose,
        /// Submitted values (paths, or the new title for renames)
        values: Vec<String>,
    },

    /// User cancelled without making changes
    Cancelled,

    /// Component closed naturally (e.g. help overlay dismissed)
    Closed,
}
