//! Path input popup.
//!
//! Stands in for the browser's file pickers: a single input line collecting
//! file paths (comma-separated for images), filtered by extension per
//! purpose. Also doubles as the free-text prompt for renaming the attached
//! document.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent, PromptPurpose};
use super::Theme;

/// Accepted image file extensions (lowercase).
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Whether a value names a file with an accepted image extension.
#[must_use]
pub fn is_image_path(value: &str) -> bool {
    std::path::Path::new(value)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Path prompt component state.
#[derive(Debug, Clone)]
pub struct PathPrompt {
    purpose: PromptPurpose,
    input: String,
    error: Option<String>,
}

impl PathPrompt {
    /// Creates a prompt for the given purpose.
    #[must_use]
    pub fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            input: String::new(),
            error: None,
        }
    }

    /// Creates a prompt pre-filled with an initial value (used for renames).
    #[must_use]
    pub fn with_value(purpose: PromptPurpose, value: impl Into<String>) -> Self {
        Self {
            purpose,
            input: value.into(),
            error: None,
        }
    }

    /// The prompt's purpose.
    #[must_use]
    pub const fn purpose(&self) -> PromptPurpose {
        self.purpose
    }

    fn title(&self) -> &'static str {
        match self.purpose {
            PromptPurpose::Images => " Add Images ",
            PromptPurpose::Document => " Add Document ",
            PromptPurpose::DocumentTitle => " Document Title ",
        }
    }

    fn hint(&self) -> &'static str {
        match self.purpose {
            PromptPurpose::Images => "Paths, comma-separated (png/jpg/jpeg/gif/webp, up to 4)",
            PromptPurpose::Document => "Path to a .pdf document",
            PromptPurpose::DocumentTitle => "New title for the attached document",
        }
    }

    fn has_pdf_extension(value: &str) -> bool {
        std::path::Path::new(value)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }

    /// Splits and validates the input, or records an inline error.
    fn submit(&mut self) -> Option<ComponentEvent> {
        let values: Vec<String> = match self.purpose {
            PromptPurpose::Images => self
                .input
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => {
                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed.to_string()]
                }
            }
        };

        if values.is_empty() {
            self.error = Some("Nothing entered".to_string());
            return None;
        }

        let invalid: Option<&String> = match self.purpose {
            PromptPurpose::Images => values.iter().find(|v| !is_image_path(v)),
            PromptPurpose::Document => values.iter().find(|v| !Self::has_pdf_extension(v)),
            PromptPurpose::DocumentTitle => None,
        };

        if let Some(value) = invalid {
            self.error = Some(format!("Not an accepted file type: {value}"));
            return None;
        }

        Some(ComponentEvent::PathsSubmitted {
            purpose: self.purpose,
            values,
        })
    }
}

impl Component for PathPrompt {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(ComponentEvent::Cancelled),
            KeyCode::Enter => return self.submit(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(70, 7, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(Span::styled(
                self.hint(),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.accent)),
                Span::styled(self.input.clone(), Style::default().fg(theme.text)),
                Span::styled("▏", Style::default().fg(theme.accent)),
            ]),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Enter: confirm | Esc: cancel",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background).fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(Span::styled(
                        self.title(),
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    )),
            );

        f.render_widget(widget, popup);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
