//! Preview card widget.
//!
//! Renders the post the way the target platform would: author header,
//! height-clamped text with the `…more` affordance, media section, and the
//! reactions footer. The card width follows the active device class.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{FOOTER_COMMENTS, FOOTER_REACTIONS, FOOTER_REPOSTS};
use crate::measure::{visible_rows, wrap_text};
use crate::models::{resolve_identity, MediaAttachment, ResolvedPhoto};

use super::{AppState, Focus, Theme};

/// Preview card widget.
pub struct PreviewCard;

impl PreviewCard {
    /// Render the card centered in `area` at the device's width.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let view = state.device.view_config();
        let inner = view.text_columns() as u16;
        let card_width = (inner + 4).min(area.width);
        let x = area.x + (area.width.saturating_sub(card_width)) / 2;
        let card_area = Rect::new(x, area.y, card_width, area.height);

        let mut lines: Vec<Line<'static>> = Vec::new();
        Self::push_header(&mut lines, state, theme);
        lines.push(Line::from(""));
        Self::push_body(&mut lines, state, theme, inner as usize);
        Self::push_media(&mut lines, state, theme);
        lines.push(Line::from(""));
        Self::push_footer(&mut lines, theme);

        let border_style = if state.focus == Focus::Preview {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let card = Paragraph::new(lines)
            .style(Style::default().bg(theme.surface).fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", state.device.label())),
            );

        f.render_widget(card, card_area);
    }

    /// Author header: avatar badge, name, headline, post age.
    fn push_header(lines: &mut Vec<Line<'static>>, state: &AppState, theme: &Theme) {
        let identity = resolve_identity(&state.settings);

        // A custom photo that cannot be loaded degrades to the initial badge
        let badge = match &identity.photo {
            ResolvedPhoto::Custom(path) if path.exists() => "📷".to_string(),
            ResolvedPhoto::Placeholder => "👤".to_string(),
            ResolvedPhoto::Custom(_) | ResolvedPhoto::Default => {
                format!("({})", identity.initial())
            }
        };

        lines.push(Line::from(vec![
            Span::styled(badge, Style::default().fg(theme.accent)),
            Span::raw(" "),
            Span::styled(
                identity.display_name,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", identity.headline),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {} • 🌐", state.draft.age_label(Utc::now())),
            Style::default().fg(theme.text_muted),
        )));
    }

    /// Post text, clamped to the device height budget when collapsed.
    fn push_body(lines: &mut Vec<Line<'static>>, state: &AppState, theme: &Theme, inner: usize) {
        if state.draft.is_empty() && state.media.is_none() {
            lines.push(Line::from(Span::styled(
                "Start typing to see your post preview...",
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            )));
            return;
        }

        let rows = wrap_text(state.draft.text(), inner);
        let clamp = !state.expand.is_expanded() && state.overflowing;
        let shown: &[String] = if clamp {
            let budget = visible_rows(&state.device.view_config());
            &rows[..budget.min(rows.len())]
        } else {
            &rows
        };

        for row in shown {
            lines.push(Line::from(Span::raw(row.clone())));
        }

        if clamp {
            lines.push(Line::from(Span::styled(
                "…more",
                Style::default().fg(theme.text_muted),
            )));
        } else if state.expand.can_collapse() {
            lines.push(Line::from(Span::styled(
                "…less",
                Style::default().fg(theme.text_muted),
            )));
        }
    }

    /// Media section: image grid or document carousel.
    fn push_media(lines: &mut Vec<Line<'static>>, state: &AppState, theme: &Theme) {
        match &state.media {
            MediaAttachment::None => {}
            MediaAttachment::Images(images) => {
                lines.push(Line::from(""));
                // Platform-style grid: a lone image gets a full-width cell,
                // three images put the first one full-width
                let names: Vec<String> = images
                    .iter()
                    .map(|img| format!("▣ {}", img.display_name()))
                    .collect();
                let grid: Vec<String> = match names.len() {
                    1 => vec![names[0].clone()],
                    2 => vec![names.join("  ")],
                    3 => vec![names[0].clone(), names[1..].join("  ")],
                    _ => vec![names[..2].join("  "), names[2..].join("  ")],
                };
                for row in grid {
                    lines.push(Line::from(Span::styled(
                        row,
                        Style::default().fg(theme.text_secondary),
                    )));
                }
            }
            MediaAttachment::Document(doc) => {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("📄 ", Style::default().fg(theme.accent)),
                    Span::styled(
                        doc.title.clone(),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));

                if state.document_job.is_some() {
                    lines.push(Line::from(Span::styled(
                        "   Rendering pages…",
                        Style::default().fg(theme.text_muted),
                    )));
                    return;
                }

                let count = doc.page_count();
                lines.push(Line::from(Span::styled(
                    format!("   {} {}", count, if count == 1 { "page" } else { "pages" }),
                    Style::default().fg(theme.text_muted),
                )));

                if let Some(page) = doc.current() {
                    let body = page.thumbnail.as_ref().map_or_else(
                        || format!("▦ (page {})", page.index + 1),
                        |path| format!("▦ {}", path.display()),
                    );
                    lines.push(Line::from(Span::styled(
                        body,
                        Style::default().fg(theme.text_secondary),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("◀ {} / {} ▶", doc.current_page() + 1, count),
                        Style::default().fg(theme.text_muted),
                    )));
                }
            }
        }
    }

    /// Fixed reactions footer.
    fn push_footer(lines: &mut Vec<Line<'static>>, theme: &Theme) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("👍 {}", FOOTER_REACTIONS),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                format!("    {} • {}", FOOTER_COMMENTS, FOOTER_REPOSTS),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
}
