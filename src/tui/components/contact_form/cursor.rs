//! Per-field cursor and scroll tracking.
//!
//! `CursorState` owns a byte offset into the field's buffer and a scroll
//! offset (wrapped lines for the message box, columns for single-line
//! fields). The buffer itself lives in `ContactForm` and is passed in.

use super::text_wrap::{
    MESSAGE_LINES, display_width, inner_width, wrap_line_count, wrap_options,
};

#[derive(Debug, Clone, Default)]
pub(super) struct CursorState {
    /// Byte offset in the buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line (message) or column (single-line)
    pub scroll: usize,
}

impl CursorState {
    /// Keep the cursor inside `buffer` after it changed underneath us
    /// (e.g. the form was cleared after a successful send).
    pub fn clamp(&mut self, buffer: &str) {
        if self.pos > buffer.len() || !buffer.is_char_boundary(self.pos) {
            self.pos = buffer.len();
        }
        if buffer.is_empty() {
            self.scroll = 0;
        }
    }

    /// Move cursor up (`direction < 0`) or down, keeping the column.
    ///
    /// Returns `true` if the cursor moved, `false` at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, box_width: u16) -> bool {
        let width = inner_width(box_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }
        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Bytes a wrapped line spans, including its newline when it ends one
        let span_of = |line: &str, offset: usize| -> usize {
            let end = offset + line.len();
            line.len() + usize::from(end < buffer.len() && buffer.as_bytes()[end] == b'\n')
        };

        let mut start = 0;
        let mut current = lines.len() - 1;
        let mut column = 0;
        for (idx, line) in lines.iter().enumerate() {
            if start + line.len() >= self.pos {
                current = idx;
                column = self.pos - start;
                break;
            }
            start += span_of(line, start);
        }

        let target = match direction {
            d if d < 0 && current > 0 => current - 1,
            d if d > 0 && current + 1 < lines.len() => current + 1,
            _ => return false,
        };

        let mut target_start = 0;
        for line in lines.iter().take(target) {
            target_start += span_of(line, target_start);
        }
        let mut pos = target_start + column.min(lines[target].len());
        while !buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
        true
    }

    /// Wrapped line (0-based) the cursor is on.
    pub fn line(&self, buffer: &str, box_width: u16) -> usize {
        let width = inner_width(box_width);
        if width == 0 {
            return 0;
        }
        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = lines.len().saturating_sub(1);

        // A newline right before the cursor that textwrap didn't represent
        if before.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
            line += 1;
        }
        line
    }

    /// Column of the cursor within its wrapped line.
    pub fn column(&self, buffer: &str, box_width: u16) -> u16 {
        let width = inner_width(box_width);
        let before = &buffer[..self.pos];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[line_start..];
        if width == 0 || logical.is_empty() {
            return 0;
        }

        // textwrap trims trailing spaces, so count chars rather than
        // measuring the wrapped segment.
        let segments = textwrap::wrap(logical, wrap_options(width));
        let in_previous: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.chars().count())
            .sum();
        u16::try_from(logical.chars().count().saturating_sub(in_previous))
            .unwrap_or(width)
            .min(width)
    }

    /// Scroll the message box so the cursor line is visible.
    pub fn follow_multiline(&mut self, buffer: &str, box_width: u16) {
        let visible = usize::from(MESSAGE_LINES);
        let total = wrap_line_count(buffer, inner_width(box_width));
        if total <= visible {
            self.scroll = 0;
            return;
        }
        let line = self.line(buffer, box_width);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + visible {
            self.scroll = line + 1 - visible;
        }
    }

    /// Scroll a single-line field so the cursor column is visible.
    pub fn follow_single_line(&mut self, buffer: &str, box_width: u16) {
        let width = usize::from(inner_width(box_width).max(1));
        let col = display_width(&buffer[..self.pos]);
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + width {
            self.scroll = col + 1 - width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field boxes are 4 columns wider than their text.
    const BOX_10: u16 = 10 + 4;

    #[test]
    fn test_clamp_after_clear() {
        let mut cursor = CursorState { pos: 12, scroll: 3 };
        cursor.clamp("");
        assert_eq!(cursor.pos, 0);
        assert_eq!(cursor.scroll, 0);
    }

    #[test]
    fn test_line_and_column_on_explicit_newlines() {
        let buffer = "ab\ncde";
        let cursor = CursorState { pos: 5, scroll: 0 };
        assert_eq!(cursor.line(buffer, BOX_10), 1);
        assert_eq!(cursor.column(buffer, BOX_10), 2);
    }

    #[test]
    fn test_line_after_trailing_newline() {
        let buffer = "ab\n";
        let cursor = CursorState { pos: 3, scroll: 0 };
        assert_eq!(cursor.line(buffer, BOX_10), 1);
        assert_eq!(cursor.column(buffer, BOX_10), 0);
    }

    #[test]
    fn test_move_vertically_keeps_column() {
        let buffer = "abcd\nxyz";
        let mut cursor = CursorState { pos: 7, scroll: 0 }; // after "xy"
        assert!(cursor.move_vertically(buffer, -1, BOX_10));
        assert_eq!(cursor.pos, 2);
        assert!(!cursor.move_vertically(buffer, -1, BOX_10));
        assert!(cursor.move_vertically(buffer, 1, BOX_10));
        assert_eq!(cursor.pos, 7);
        assert!(!cursor.move_vertically(buffer, 1, BOX_10));
    }

    #[test]
    fn test_follow_multiline_scrolls_down() {
        let buffer = "1\n2\n3\n4\n5\n6\n7";
        let mut cursor = CursorState {
            pos: buffer.len(),
            scroll: 0,
        };
        cursor.follow_multiline(buffer, BOX_10);
        assert_eq!(cursor.scroll, 2);

        cursor.pos = 0;
        cursor.follow_multiline(buffer, BOX_10);
        assert_eq!(cursor.scroll, 0);
    }

    #[test]
    fn test_follow_single_line_scrolls_right() {
        let buffer = "abcdefghijklmno"; // 15 columns into a 10-wide field
        let mut cursor = CursorState {
            pos: buffer.len(),
            scroll: 0,
        };
        cursor.follow_single_line(buffer, BOX_10);
        assert_eq!(cursor.scroll, 6);

        cursor.pos = 2;
        cursor.follow_single_line(buffer, BOX_10);
        assert_eq!(cursor.scroll, 2);
    }

    #[test]
    fn test_follow_single_line_beyond_u16_columns() {
        let buffer = "a".repeat(70_000);
        let mut cursor = CursorState {
            pos: buffer.len(),
            scroll: 0,
        };
        cursor.follow_single_line(&buffer, BOX_10);
        assert_eq!(cursor.scroll, 69_991);
    }
}
