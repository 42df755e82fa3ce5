//! Auto-spacing formatter for post text.
//!
//! Reformats pasted text into platform-idiomatic paragraph and list spacing:
//! mashed-together list items are split onto their own lines, and blank-line
//! separators are inserted around section headers and between paragraphs.
//! Non-whitespace content and its relative order are never changed.
//!
//! Reapplying the pass to already-spaced text carries no idempotence
//! guarantee; the heuristic is kept as-is (see DESIGN.md).

use regex::Regex;

/// The three list-marker glyphs: forward arrow, bullet, hook arrow.
pub const LIST_MARKERS: [char; 3] = ['→', '•', '↳'];

/// Number of leading content lines that form the hook and receive no
/// inserted spacing.
const HOOK_LINES: usize = 2;

fn is_list_marker(c: char) -> bool {
    LIST_MARKERS.contains(&c)
}

/// Whether a line starts with one of the list-marker glyphs.
#[must_use]
pub fn is_list_item(line: &str) -> bool {
    line.chars().next().is_some_and(is_list_marker)
}

/// Whether a line contains more than one occurrence of any single marker
/// kind, i.e. holds several list items mashed together.
fn has_mashed_markers(line: &str) -> bool {
    LIST_MARKERS
        .iter()
        .any(|&marker| line.chars().filter(|&c| c == marker).count() > 1)
}

/// Splits a mashed line at every marker occurrence.
///
/// Each resulting item is one marker glyph followed by its trailing text run
/// (joined with a single space). Text before the first marker becomes its own
/// line. Items that are empty after trimming are dropped; a bare marker is
/// non-empty and therefore kept.
fn split_mashed_items(line: &str) -> Vec<String> {
    // Tokenize into marker glyphs and text runs, dropping whitespace-only runs
    let mut parts: Vec<String> = Vec::new();
    let mut run = String::new();
    for c in line.chars() {
        if is_list_marker(c) {
            if !run.trim().is_empty() {
                parts.push(run.clone());
            }
            run.clear();
            parts.push(c.to_string());
        } else {
            run.push(c);
        }
    }
    if !run.trim().is_empty() {
        parts.push(run);
    }

    let mut items: Vec<String> = Vec::new();
    let mut current = String::new();
    for part in &parts {
        let part = part.trim();
        let is_marker = part.chars().count() == 1 && part.chars().next().is_some_and(is_list_marker);
        if is_marker {
            if !current.trim().is_empty() {
                items.push(current.trim().to_string());
            }
            current = part.to_string();
        } else {
            if !current.is_empty() && !current.ends_with(' ') {
                current.push(' ');
            }
            current.push_str(part);
        }
    }
    if !current.trim().is_empty() {
        items.push(current.trim().to_string());
    }

    items
}

/// Applies the auto-spacing heuristic to raw post text.
///
/// 1. Lines are trimmed and empty lines dropped.
/// 2. Lines holding several list items are split at every marker.
/// 3. Blank separators are inserted: after and before section headers, after
///    the last item of a list run, and between plain paragraphs (except
///    directly after a header). The first two content lines (the hook) and
///    the final line never get a blank inserted after them.
#[must_use]
pub fn auto_space(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Line starts with a keycap glyph: digit + U+FE0F U+20E3
    let header_re = Regex::new("^[0-9]\u{FE0F}\u{20E3}").unwrap();

    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut processed: Vec<String> = Vec::new();
    for line in lines {
        if has_mashed_markers(line) {
            processed.extend(split_mashed_items(line));
        } else {
            processed.push(line.to_string());
        }
    }

    let mut result: Vec<String> = Vec::new();
    for i in 0..processed.len() {
        let current = &processed[i];
        let next = processed.get(i + 1);
        let prev = if i > 0 { processed.get(i - 1) } else { None };

        let is_header = header_re.is_match(current);
        let next_is_header = next.is_some_and(|line| header_re.is_match(line));
        let prev_was_header = prev.is_some_and(|line| header_re.is_match(line));

        let is_item = is_list_item(current);
        let next_is_item = next.is_some_and(|line| is_list_item(line));

        let in_hook = i < HOOK_LINES;

        result.push(current.clone());

        // Never after the final content line
        if i + 1 >= processed.len() {
            continue;
        }

        if in_hook {
            // Hook lines stay dense
        } else if is_header {
            // Blank after a section header
            result.push(String::new());
        } else if next_is_header {
            // Blank before a section header
            result.push(String::new());
        } else if is_item && next_is_item {
            // Consecutive list items stay grouped
        } else if is_item {
            // Blank after the last item of a list run
            result.push(String::new());
        } else if !next_is_item && !prev_was_header {
            // Blank between plain paragraphs, but not right after a header
            result.push(String::new());
        }
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All non-whitespace characters of a text, in order.
    fn content_chars(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(auto_space(""), "");
    }

    #[test]
    fn test_no_content_loss() {
        let input = "First line\n\n  padded  \n→a→b→c\n1️⃣ Section\nbody text";
        let output = auto_space(input);
        assert_eq!(content_chars(&output), content_chars(input));
    }

    #[test]
    fn test_mashed_arrows_split() {
        let output = auto_space("→a→b→c");
        assert_eq!(output, "→ a\n→ b\n→ c");
    }

    #[test]
    fn test_mashed_bullets_split() {
        let output = auto_space("•one •two •three");
        let items: Vec<&str> = output.split('\n').filter(|l| !l.is_empty()).collect();
        assert_eq!(items, ["• one", "• two", "• three"]);
        for item in items {
            assert_eq!(item.chars().filter(|&c| c == '•').count(), 1);
        }
    }

    #[test]
    fn test_single_marker_line_not_split() {
        // One occurrence of each kind: below the mash threshold
        let output = auto_space("→ mixed • line ↳ here\nsecond hook line");
        assert!(output.starts_with("→ mixed • line ↳ here"));
    }

    #[test]
    fn test_text_before_first_marker_kept() {
        let output = auto_space("intro →a →b");
        let lines: Vec<&str> = output.split('\n').filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, ["intro", "→ a", "→ b"]);
    }

    #[test]
    fn test_bare_marker_kept_when_nonempty() {
        // A marker with no trailing text survives as its own item
        let output = auto_space("→→tail");
        let lines: Vec<&str> = output.split('\n').filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, ["→", "→ tail"]);
    }

    #[test]
    fn test_hook_lines_stay_dense() {
        let output = auto_space("hook one\nhook two\nthird paragraph");
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines[0], "hook one");
        assert_eq!(lines[1], "hook two");
        // No blank between the two hook lines; the third line follows rules
        assert_ne!(lines[1], "");
    }

    #[test]
    fn test_blank_after_and_before_header() {
        let output = auto_space("hook one\nhook two\nplain\n1️⃣ Section\nbody");
        assert_eq!(
            output,
            "hook one\nhook two\nplain\n\n1️⃣ Section\n\nbody"
        );
    }

    #[test]
    fn test_header_always_followed_by_blank() {
        let output = auto_space("a\nb\n2️⃣ Header\nbody\nmore");
        let lines: Vec<&str> = output.split('\n').collect();
        let header_idx = lines.iter().position(|l| l.starts_with('2')).unwrap();
        assert_eq!(lines[header_idx + 1], "");
    }

    #[test]
    fn test_header_as_last_line_gets_no_blank() {
        let output = auto_space("a\nb\n3️⃣ Closing");
        assert!(!output.ends_with('\n'));
        assert!(output.ends_with("3️⃣ Closing"));
    }

    #[test]
    fn test_list_run_grouped_then_blank() {
        let output = auto_space("hook\nsecond\n→ one\n→ two\n→ three\nafter list");
        assert_eq!(
            output,
            "hook\nsecond\n→ one\n→ two\n→ three\n\nafter list"
        );
    }

    #[test]
    fn test_plain_paragraphs_separated() {
        let output = auto_space("hook\nsecond\nthird\nfourth");
        assert_eq!(output, "hook\nsecond\nthird\n\nfourth");
    }

    #[test]
    fn test_no_double_blank_after_header() {
        // The line directly after a header gets no paragraph separator from
        // the plain-paragraph rule; the hook exempts line b from the
        // before-header rule.
        let output = auto_space("a\nb\n1️⃣ H\nfirst body\nsecond body");
        assert_eq!(output, "a\nb\n1️⃣ H\n\nfirst body\nsecond body");
    }

    #[test]
    fn test_no_trailing_blank_line() {
        let output = auto_space("one\ntwo\nthree\nfour\n\n\n");
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_existing_blanks_are_rebuilt() {
        // Pre-existing blank runs are collapsed; the hook and final line
        // get no new separators
        let output = auto_space("hook\n\n\nsecond\n\n\n\nthird");
        assert_eq!(output, "hook\nsecond\nthird");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(auto_space("   \n\t\n  "), "");
    }
}
