//! The post draft and its synchronously derived counters.

use chrono::{DateTime, Utc};

use crate::constants::SAMPLE_POST;

/// Editable post text with derived character and line counts.
///
/// The derived fields are recomputed on every mutation so the UI never
/// renders a stale counter.
#[derive(Debug, Clone)]
pub struct PostDraft {
    text: String,
    char_count: usize,
    line_count: usize,
    /// When this editing session started, used for the card's age label.
    pub opened_at: DateTime<Utc>,
}

impl PostDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            char_count: 0,
            line_count: 1,
            opened_at: Utc::now(),
        }
    }

    /// Creates a draft from existing text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut draft = Self::new();
        draft.set_text(text.into());
        draft
    }

    /// Replaces the draft text and recomputes the derived counters.
    pub fn set_text(&mut self, text: String) {
        self.char_count = text.chars().count();
        self.line_count = text.split('\n').count();
        self.text = text;
    }

    /// Loads the bundled sample post.
    pub fn load_sample(&mut self) {
        self.set_text(SAMPLE_POST.to_string());
    }

    /// Clears the draft text.
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// The current draft text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the draft has any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character count (Unicode scalar values).
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    /// Line count (an empty draft counts as one line).
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// Age of the editing session as a compact label ("21m", "2h").
    #[must_use]
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let minutes = (now - self.opened_at).num_minutes().max(0);
        if minutes < 60 {
            format!("{}m", minutes.max(1))
        } else if minutes < 24 * 60 {
            format!("{}h", minutes / 60)
        } else {
            format!("{}d", minutes / (24 * 60))
        }
    }
}

impl Default for PostDraft {
    fn default() -> Self {
        Self::new()
    }
}
