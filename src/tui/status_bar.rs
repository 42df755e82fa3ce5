//! Status bar widget for displaying status messages and help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{MAX_POST_CHARS, WARN_POST_CHARS};

use super::{ActivePopup, AppState, Focus, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with counters and contextual help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(state.status_message.as_str()));
        }

        // Counter line: characters with soft thresholds, lines, device
        content_lines.push(Self::counter_line(state, theme));

        // Activity line: copied indicator and background jobs
        if let Some(activity) = Self::activity_line(state, theme) {
            content_lines.push(activity);
        }

        // 6 rows - 2 borders = 4 rows, minus 1 for the help line
        const MAX_CONTENT_LINES: usize = 3;
        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());

        let mut status_text: Vec<Line> = Vec::new();
        for line in content_lines.into_iter().take(MAX_CONTENT_LINES) {
            status_text.push(line);
        }
        for _ in 0..padding_needed {
            status_text.push(Line::from(""));
        }
        status_text.push(Self::help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Character/line counters with the platform's soft warning colors.
    fn counter_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let chars = state.draft.char_count();
        let char_color = if chars > MAX_POST_CHARS {
            theme.error
        } else if chars >= WARN_POST_CHARS {
            theme.warning
        } else {
            theme.success
        };

        let lines = state.draft.line_count();
        Line::from(vec![
            Span::styled(
                format!("{chars} / {MAX_POST_CHARS} characters"),
                Style::default().fg(char_color),
            ),
            Span::styled(
                format!(" • {lines} {}", if lines == 1 { "line" } else { "lines" }),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                format!(
                    "  |  Viewing: {} ({} lines max)",
                    state.device.label(),
                    state.device.view_config().max_visible_lines
                ),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }

    /// Transient indicators: clipboard confirmation and in-flight jobs.
    fn activity_line(state: &AppState, theme: &Theme) -> Option<Line<'static>> {
        let mut spans: Vec<Span<'static>> = Vec::new();

        if state.copied_indicator_active() {
            spans.push(Span::styled(
                "✓ Copied",
                Style::default().fg(theme.success),
            ));
        }
        if state.document_job.is_some() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                "Rendering document…",
                Style::default().fg(theme.warning),
            ));
        }
        if state.export_job.is_some() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                "Exporting…",
                Style::default().fg(theme.warning),
            ));
        }

        if spans.is_empty() {
            None
        } else {
            Some(Line::from(spans))
        }
    }

    /// Contextual key hints for the current focus or popup.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match &state.active_popup {
            Some(ActivePopup::IdentityEditor(_)) => {
                &[("Tab", "field"), ("Space", "toggle"), ("Enter", "save"), ("Esc", "cancel")]
            }
            Some(ActivePopup::PathPrompt(_)) => &[("Enter", "confirm"), ("Esc", "cancel")],
            Some(ActivePopup::HelpOverlay(_)) => &[("Esc", "close")],
            None => match state.focus {
                Focus::Editor => &[
                    ("Tab", "preview"),
                    ("Ctrl+F", "auto-space"),
                    ("Ctrl+Y", "copy"),
                    ("Ctrl+E", "export"),
                    ("F1", "help"),
                ],
                Focus::Preview => &[
                    ("Tab", "editor"),
                    ("Enter", "more/less"),
                    ("←/→", "pages"),
                    ("d", "device"),
                    ("?", "help"),
                ],
            },
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
