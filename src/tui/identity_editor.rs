//! Identity editor popup.
//!
//! Edits the persisted author-identity fields: display name, headline,
//! custom photo reference, and the override toggle. Saving emits an event;
//! the parent writes the settings through to disk.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::PathBuf;

use crate::settings::Settings;

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Fields in the identity editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    OverrideToggle,
    Name,
    Headline,
    PhotoPath,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::OverrideToggle => Self::Name,
            Self::Name => Self::Headline,
            Self::Headline => Self::PhotoPath,
            Self::PhotoPath => Self::OverrideToggle,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::OverrideToggle => Self::PhotoPath,
            Self::Name => Self::OverrideToggle,
            Self::Headline => Self::Name,
            Self::PhotoPath => Self::Headline,
        }
    }
}

/// Identity editor component state.
#[derive(Debug, Clone)]
pub struct IdentityEditor {
    active_field: Field,
    override_enabled: bool,
    name: String,
    headline: String,
    photo_path: String,
    error: Option<String>,
}

impl IdentityEditor {
    /// Creates an editor pre-filled from the current settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            active_field: Field::OverrideToggle,
            override_enabled: settings.use_profile_override,
            name: settings.author_name.clone(),
            headline: settings.author_headline.clone(),
            photo_path: settings
                .custom_photo
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
            error: None,
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            Field::OverrideToggle => None,
            Field::Name => Some(&mut self.name),
            Field::Headline => Some(&mut self.headline),
            Field::PhotoPath => Some(&mut self.photo_path),
        }
    }

    /// Builds the save event, or records an inline error when the photo
    /// reference is not an image file.
    fn save_event(&mut self) -> Option<ComponentEvent> {
        let trimmed = self.photo_path.trim();
        let photo = if trimmed.is_empty() {
            None
        } else {
            if !super::path_prompt::is_image_path(trimmed) {
                self.error = Some(format!("Not an image file: {trimmed}"));
                return None;
            }
            Some(PathBuf::from(trimmed))
        };
        Some(ComponentEvent::IdentitySaved {
            name: self.name.clone(),
            headline: self.headline.clone(),
            photo,
            override_enabled: self.override_enabled,
        })
    }

    fn field_line(
        &self,
        label: &str,
        value: &str,
        field: Field,
        theme: &Theme,
    ) -> Line<'static> {
        let marker = if self.active_field == field { "▸ " } else { "  " };
        let value_style = if self.active_field == field {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(
                format!("{marker}{label:<10}"),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(value.to_string(), value_style),
        ])
    }
}

impl Component for IdentityEditor {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(ComponentEvent::Cancelled),
            KeyCode::Enter => return self.save_event(),
            KeyCode::Tab | KeyCode::Down => self.active_field = self.active_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.active_field = self.active_field.previous(),
            KeyCode::Char(' ') if self.active_field == Field::OverrideToggle => {
                self.override_enabled = !self.override_enabled;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.active_input_mut() {
                    input.push(c);
                    self.error = None;
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                    self.error = None;
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 12, area);
        f.render_widget(Clear, popup);

        let toggle = if self.override_enabled { "[x] on" } else { "[ ] off" };
        let mut lines = vec![
            self.field_line("Override", toggle, Field::OverrideToggle, theme),
            self.field_line("Name", &self.name, Field::Name, theme),
            self.field_line("Headline", &self.headline, Field::Headline, theme),
            self.field_line("Photo", &self.photo_path, Field::PhotoPath, theme),
            Line::from(""),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Tab: next field | Space: toggle | Enter: save | Esc: cancel",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background).fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(Span::styled(
                        " Your Profile ",
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    )),
            );

        f.render_widget(widget, popup);
    }
}

/// Centers a fixed-size rect within `area`.
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
