//! Text measurement helpers for the form fields.
//!
//! Stateless: no dependency on the form or its cursors.

use unicode_width::UnicodeWidthChar;

/// Border (2) + horizontal padding (2) around a field's text.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from a field's left edge to its first text column.
pub(super) const TEXT_OFFSET_X: u16 = 2;
/// Offset from a field's top edge to its first text row.
pub(super) const TEXT_OFFSET_Y: u16 = 1;
/// Visible lines in the message box before it scrolls.
pub(super) const MESSAGE_LINES: u16 = 5;

/// textwrap options for a field of the given inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Text width inside a field box `box_width` columns wide.
pub(super) fn inner_width(box_width: u16) -> u16 {
    box_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped line count, including the empty line after a trailing newline.
pub(super) fn wrap_line_count(text: &str, width: u16) -> usize {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = lines.len().max(1);
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }
    count
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Display columns taken by `text`.
pub(super) fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// The part of a single-line `text` visible in columns `scroll..scroll + width`.
pub(super) fn visible_slice(text: &str, scroll: usize, width: u16) -> String {
    let end = scroll.saturating_add(usize::from(width));
    let mut col = 0usize;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if col >= scroll && col + w <= end {
            out.push(c);
        }
        col += w;
        if col >= end {
            break;
        }
    }
    out
}
