//! Text-card renderer for exports.
//!
//! Renders the preview card as a Unicode box-drawing diagram: header with
//! avatar badge, name and headline, the full post text, the media section,
//! the reactions footer, and the watermark stamped centered beneath the
//! card.

use std::fmt::Write as _;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::constants::{EXPORT_WATERMARK, FOOTER_COMMENTS, FOOTER_REACTIONS, FOOTER_REPOSTS};
use crate::measure::wrap_text;
use crate::models::{MediaAttachment, ResolvedPhoto};

use super::{CardRasterizer, CardSnapshot, ExportOptions};

/// Renders cards as plain-text box diagrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCardRasterizer;

impl CardRasterizer for TextCardRasterizer {
    fn rasterize(&self, snapshot: &CardSnapshot, options: &ExportOptions) -> Result<Vec<u8>> {
        Ok(render_card_text(snapshot, options).into_bytes())
    }
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pads or truncates `content` to exactly `width` display columns.
fn fit(content: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in content.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

fn bordered_row(output: &mut String, content: &str, inner: usize) {
    writeln!(output, "│ {} │", fit(content, inner)).unwrap();
}

fn centered(content: &str, total: usize) -> String {
    let width = display_width(content);
    if width >= total {
        return content.to_string();
    }
    let left = (total - width) / 2;
    format!("{}{}", " ".repeat(left), content)
}

/// Renders the card snapshot as a text diagram.
///
/// The text renderer has no pixels, so `scale` and `quality` are carried for
/// raster implementations of the seam and do not change the output here.
#[must_use]
pub fn render_card_text(snapshot: &CardSnapshot, _options: &ExportOptions) -> String {
    // Two columns of border padding on each side
    let inner = snapshot.view.text_columns().max(24);
    let total = inner + 4;

    let mut output = String::new();
    writeln!(output, "┌{}┐", "─".repeat(inner + 2)).unwrap();

    // Header: avatar badge, name, headline, age
    let badge = match &snapshot.identity.photo {
        ResolvedPhoto::Custom(path) if path.exists() => format!("[img {}]", path.display()),
        ResolvedPhoto::Custom(_) | ResolvedPhoto::Placeholder | ResolvedPhoto::Default => {
            format!("({})", snapshot.identity.initial())
        }
    };
    bordered_row(
        &mut output,
        &format!("{} {}", badge, snapshot.identity.display_name),
        inner,
    );
    bordered_row(&mut output, &format!("    {}", snapshot.identity.headline), inner);
    bordered_row(&mut output, &format!("    {} • 🌐", snapshot.age_label), inner);
    writeln!(output, "├{}┤", "─".repeat(inner + 2)).unwrap();

    // Body: the full, unclamped post text
    if snapshot.text.is_empty() {
        bordered_row(&mut output, "(empty post)", inner);
    } else {
        for row in wrap_text(&snapshot.text, inner) {
            bordered_row(&mut output, &row, inner);
        }
    }

    // Media section
    match &snapshot.media {
        MediaAttachment::None => {}
        MediaAttachment::Images(images) => {
            bordered_row(&mut output, "", inner);
            for image in images {
                bordered_row(&mut output, &format!("🖼  {}", image.display_name()), inner);
            }
        }
        MediaAttachment::Document(doc) => {
            bordered_row(&mut output, "", inner);
            bordered_row(
                &mut output,
                &format!(
                    "📄 {} — {} {}",
                    doc.title,
                    doc.page_count(),
                    if doc.page_count() == 1 { "page" } else { "pages" }
                ),
                inner,
            );
        }
    }

    // Footer: fixed reaction counts
    writeln!(output, "├{}┤", "─".repeat(inner + 2)).unwrap();
    bordered_row(
        &mut output,
        &format!(
            "👍 {}    {} • {}",
            FOOTER_REACTIONS, FOOTER_COMMENTS, FOOTER_REPOSTS
        ),
        inner,
    );
    writeln!(output, "└{}┘", "─".repeat(inner + 2)).unwrap();

    // Watermark, centered below the card
    writeln!(output).unwrap();
    writeln!(output, "{}", centered(EXPORT_WATERMARK, total)).unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{resolve_identity, DeviceClass};
    use crate::settings::Settings;

    fn snapshot_with_text(text: &str) -> CardSnapshot {
        CardSnapshot {
            identity: resolve_identity(&Settings::new()),
            text: text.to_string(),
            media: MediaAttachment::None,
            view: DeviceClass::Compact.view_config(),
            dark_mode: false,
            age_label: "21m".to_string(),
        }
    }

    #[test]
    fn test_card_contains_watermark() {
        let card = render_card_text(&snapshot_with_text("hello"), &ExportOptions::default());
        assert!(card.contains(EXPORT_WATERMARK));
        // Watermark sits outside the card borders, on its own line
        let line = card.lines().find(|l| l.contains(EXPORT_WATERMARK)).unwrap();
        assert!(!line.contains('│'));
    }

    #[test]
    fn test_card_contains_full_text() {
        let card = render_card_text(
            &snapshot_with_text("first\nsecond\nthird\nfourth\nfifth"),
            &ExportOptions::default(),
        );
        for word in ["first", "second", "third", "fourth", "fifth"] {
            assert!(card.contains(word), "missing body line: {word}");
        }
    }

    #[test]
    fn test_card_header_and_footer() {
        let card = render_card_text(&snapshot_with_text("hi"), &ExportOptions::default());
        assert!(card.contains("Jordan Vale"));
        assert!(card.contains(FOOTER_COMMENTS));
        assert!(card.contains("21m"));
    }

    #[test]
    fn test_card_document_summary() {
        let mut snapshot = snapshot_with_text("deck attached");
        let doc = snapshot.media.attach_document("slides.pdf");
        doc.set_pages(crate::services::placeholder_pages());
        let card = render_card_text(&snapshot, &ExportOptions::default());
        assert!(card.contains("slides"));
        assert!(card.contains("5 pages"));
    }

    #[test]
    fn test_card_image_names_listed() {
        let mut snapshot = snapshot_with_text("pics");
        snapshot.media.add_images(["a.png", "b.png"]);
        let card = render_card_text(&snapshot, &ExportOptions::default());
        assert!(card.contains("a.png"));
        assert!(card.contains("b.png"));
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
    }
}
