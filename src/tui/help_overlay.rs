//! Help overlay popup listing the key bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Key binding groups shown in the overlay.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Editor",
        &[
            ("Tab", "Switch focus to the preview"),
            ("Ctrl+F", "Auto-space the post text"),
            ("Ctrl+Y", "Copy post text to clipboard"),
            ("Ctrl+S", "Save draft file"),
            ("Ctrl+L", "Load sample post (empty draft only)"),
            ("Ctrl+X", "Clear post and media"),
            ("Ctrl+P", "Edit profile identity"),
            ("Ctrl+G", "Add images"),
            ("Ctrl+O", "Attach document"),
            ("Ctrl+R", "Remove media"),
            ("Ctrl+E", "Export card"),
            ("Ctrl+D", "Cycle device class"),
            ("Ctrl+T", "Toggle dark/light theme"),
            ("Ctrl+Q", "Quit"),
        ],
    ),
    (
        "Preview",
        &[
            ("Tab", "Switch focus to the editor"),
            ("Enter", "See more / see less"),
            ("←/→", "Previous / next document page"),
            ("r", "Rename document"),
            ("x", "Remove last image"),
            ("d", "Cycle device class"),
            ("t", "Toggle dark/light theme"),
            ("c", "Copy post text"),
            ("e", "Export card"),
            ("q", "Quit"),
        ],
    ),
];

/// Help overlay component.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    /// Creates the overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::F(1) => {
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = (BINDINGS
            .iter()
            .map(|(_, rows)| rows.len() + 2)
            .sum::<usize>()
            + 3) as u16;
        let popup = centered_rect(56, height.min(area.height), area);
        f.render_widget(Clear, popup);

        let mut lines: Vec<Line> = Vec::new();
        for (group, rows) in BINDINGS {
            lines.push(Line::from(Span::styled(
                *group,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in *rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<8}"), Style::default().fg(theme.accent)),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Esc or ? to close",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background).fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(" Help "),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut overlay = HelpOverlay::new();
        for code in [KeyCode::Esc, KeyCode::Char('?'), KeyCode::Char('q')] {
            let event = overlay.handle_input(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(matches!(event, Some(ComponentEvent::Closed)));
        }
        let event = overlay.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(event.is_none());
    }
}
