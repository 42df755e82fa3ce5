//! Integration tests for the auto-spacing formatter.
//!
//! Exercises the documented formatting properties:
//! - no content loss (non-whitespace characters preserved in order)
//! - mashed list items split into one line per marker
//! - hook density, header spacing, and list grouping rules

use postpeek::formatter::{auto_space, is_list_item, LIST_MARKERS};

/// All non-whitespace characters of a text, in order.
fn content_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn content_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.is_empty()).collect()
}

#[test]
fn arrows_mashed_into_one_line_become_three_items() {
    let output = auto_space("→a→b→c");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines, ["→ a", "→ b", "→ c"]);
}

#[test]
fn two_hooks_plain_header_plain() {
    // Blank lines appear only before and after the header, never between
    // the hook lines
    let input = "hook one\nhook two\nplain line\n1️⃣ Section\nclosing line";
    let output = auto_space(input);
    assert_eq!(
        output,
        "hook one\nhook two\nplain line\n\n1️⃣ Section\n\nclosing line"
    );
}

#[test]
fn no_content_loss_across_inputs() {
    let inputs = [
        "simple text",
        "  padded \n\n\n lines \n",
        "→a→b→c\n•x •y •z",
        "1️⃣ Intro\nbody\n2️⃣ Next\nmore body",
        "emoji 🧠 text\n↳nested↳again",
    ];
    for input in inputs {
        let output = auto_space(input);
        assert_eq!(
            content_chars(&output),
            content_chars(input),
            "content changed for input: {input:?}"
        );
    }
}

#[test]
fn repeated_markers_yield_one_marker_per_item() {
    for marker in LIST_MARKERS {
        let input = format!("{marker}first {marker}second {marker}third");
        let output = auto_space(&input);
        let items = content_lines(&output);
        assert_eq!(items.len(), 3, "wrong item count for {marker}");
        for item in items {
            assert!(is_list_item(item));
            assert_eq!(
                item.chars().filter(|&c| c == marker).count(),
                1,
                "item holds more than one marker: {item}"
            );
        }
    }
}

#[test]
fn first_two_content_lines_never_separated() {
    let inputs = [
        "plain one\nplain two\nrest",
        "→ item\n→ item two\nrest",
        "1️⃣ Header\nplain\nrest",
        "1️⃣ Header\n2️⃣ Header two\nrest",
    ];
    for input in inputs {
        let output = auto_space(input);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_ne!(lines[1], "", "hook separated for input: {input:?}");
    }
}

#[test]
fn header_followed_by_blank_unless_last() {
    let output = auto_space("a\nb\nc\n3️⃣ Header\ntail");
    let lines: Vec<&str> = output.split('\n').collect();
    let header_idx = lines.iter().position(|l| l.starts_with('3')).unwrap();
    assert_eq!(lines[header_idx + 1], "");

    // As the final line, the header gets nothing after it
    let output = auto_space("a\nb\n3️⃣ Header");
    assert!(output.ends_with("3️⃣ Header"));
}

#[test]
fn list_run_stays_grouped() {
    let output = auto_space("hook\nsecond\n• a\n• b\n• c\ntail");
    assert!(output.contains("• a\n• b\n• c\n\ntail"));
}

#[test]
fn output_never_ends_with_blank_line() {
    for input in ["a\nb\nc\nd", "x\n\n\n", "1️⃣ H\nbody\n"] {
        let output = auto_space(input);
        assert!(
            !output.ends_with('\n'),
            "trailing blank for input: {input:?}"
        );
    }
}
