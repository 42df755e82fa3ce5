//! Rendered-height estimation for the post text block.
//!
//! The browser reads the text block's scroll height; the terminal has no
//! such oracle, so the height is estimated instead: greedy word-wrap at the
//! device's column budget (display columns via `unicode-width`), then rows
//! times the configured line height. The estimate feeds the overflow
//! predicate in [`crate::preview`].

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::ViewConfig;

/// Display width of a string in terminal columns.
fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wraps a single logical line at `columns`, returning the wrapped rows.
///
/// Greedy word wrap: words are packed until the next word would exceed the
/// budget. Words wider than the budget are hard-broken. An empty line still
/// occupies one row.
#[must_use]
pub fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    if line.is_empty() {
        return vec![String::new()];
    }

    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if display_width(&current) + sep + display_width(word) <= columns {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }

        if display_width(word) <= columns {
            current.push_str(word);
        } else {
            // Hard-break an over-wide word
            let mut chunk = String::new();
            for c in word.chars() {
                let c_width = UnicodeWidthChar::width(c).unwrap_or(0);
                if display_width(&chunk) + c_width > columns && !chunk.is_empty() {
                    rows.push(std::mem::take(&mut chunk));
                }
                chunk.push(c);
            }
            current = chunk;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }

    rows
}

/// Wraps multi-line text at `columns`, preserving blank lines as rows.
#[must_use]
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, columns))
        .collect()
}

/// Number of rendered rows the text occupies at `columns`.
#[must_use]
pub fn wrapped_rows(text: &str, columns: usize) -> usize {
    wrap_text(text, columns).len()
}

/// Estimated rendered height of the text block in pixels for a device.
///
/// This is the "measured height" the overflow predicate compares against the
/// device's collapsed-height budget. It is always the natural (unclamped)
/// height, matching the browser's scroll-height semantics.
#[must_use]
pub fn measured_height_px(text: &str, config: &ViewConfig) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    wrapped_rows(text, config.text_columns()) as f32 * config.line_height_px()
}

/// Number of whole rows that fit within the collapsed-height budget.
#[must_use]
pub fn visible_rows(config: &ViewConfig) -> usize {
    (config.max_visible_height_px / config.line_height_px()).floor() as usize
}
