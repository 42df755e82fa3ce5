//! Truncation / overflow engine.
//!
//! Decides, per device class, whether the rendered post text exceeds the
//! platform's collapsed height and must show the "see more" affordance, and
//! tracks the Collapsed/Expanded display state.

use crate::measure::measured_height_px;
use crate::models::ViewConfig;

/// Whether a measured text-block height exceeds the device's collapsed
/// height budget.
#[must_use]
pub fn is_overflowing(measured_px: f32, config: &ViewConfig) -> bool {
    measured_px > config.max_visible_height_px
}

/// Convenience: measure `text` for `config` and apply the overflow predicate.
#[must_use]
pub fn text_overflows(text: &str, config: &ViewConfig) -> bool {
    is_overflowing(measured_height_px(text, config), config)
}

/// Collapsed/Expanded display state for the post text.
///
/// Initial state is Collapsed. "See more" expands; "see less" collapses but
/// is only offered once the post has been expanded at least once this
/// editing session. Text edits and device changes reset the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandState {
    expanded: bool,
    expanded_once: bool,
}

impl ExpandState {
    /// Creates the initial (collapsed) state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expanded: false,
            expanded_once: false,
        }
    }

    /// Whether the full text is currently shown.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the "see less" control should be offered.
    #[must_use]
    pub const fn can_collapse(&self) -> bool {
        self.expanded && self.expanded_once
    }

    /// Explicit "see more" action.
    pub const fn see_more(&mut self) {
        self.expanded = true;
        self.expanded_once = true;
    }

    /// Explicit "see less" action. No-op unless currently expanded.
    pub const fn see_less(&mut self) {
        if self.expanded {
            self.expanded = false;
        }
    }

    /// Resets to Collapsed and clears the expanded-at-least-once flag.
    /// Called on any text edit and on device class changes.
    pub const fn reset(&mut self) {
        self.expanded = false;
        self.expanded_once = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceClass;

    #[test]
    fn test_overflow_predicate() {
        let config = DeviceClass::Compact.view_config();
        assert!(!is_overflowing(config.max_visible_height_px, &config));
        assert!(is_overflowing(config.max_visible_height_px + 0.1, &config));
    }

    #[test]
    fn test_short_text_does_not_overflow() {
        let config = DeviceClass::Compact.view_config();
        assert!(!text_overflows("short post", &config));
        assert!(!text_overflows("", &config));
    }

    #[test]
    fn test_long_text_overflows() {
        let config = DeviceClass::Compact.view_config();
        let long = "line\n".repeat(10);
        assert!(text_overflows(&long, &config));
    }

    #[test]
    fn test_initial_state_collapsed() {
        let state = ExpandState::new();
        assert!(!state.is_expanded());
        assert!(!state.can_collapse());
    }

    #[test]
    fn test_see_more_then_less() {
        let mut state = ExpandState::new();
        state.see_more();
        assert!(state.is_expanded());
        assert!(state.can_collapse());

        state.see_less();
        assert!(!state.is_expanded());
        // Collapse control needs the expanded state, not just the flag
        assert!(!state.can_collapse());
    }

    #[test]
    fn test_see_less_noop_when_collapsed() {
        let mut state = ExpandState::new();
        state.see_less();
        assert!(!state.is_expanded());
        assert!(!state.can_collapse());
    }

    #[test]
    fn test_reset_clears_expanded_once() {
        let mut state = ExpandState::new();
        state.see_more();
        state.reset();
        assert!(!state.is_expanded());
        assert!(!state.can_collapse());

        // After reset, expanding again re-arms the collapse control
        state.see_more();
        assert!(state.can_collapse());
    }
}
