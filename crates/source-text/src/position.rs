//! Position values and the offset-to-position engine.

use memchr::{memchr_iter, memrchr};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved location in source text.
///
/// `line` and `column` are 1-based, the way editors and diagnostics
/// display them. `column` counts Unicode code points, not bytes, so a
/// multi-byte character before the offset advances it by one. `offset` is
/// the byte offset the position was resolved from, clamped to the content
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters not bytes)
    pub column: usize,
    /// Byte offset from start of content (clamped)
    pub offset: usize,
}

impl Position {
    /// The position of offset zero in any content: line 1, column 1.
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolve a byte offset in `content` to a line/column position.
///
/// Resolution never fails: an offset past the end of the content is
/// clamped to the content length, and an offset landing inside a
/// multi-byte character snaps back to that character's first byte. A
/// diagnostic at trailing EOF therefore still resolves to a valid
/// position instead of an error.
///
/// A newline belongs to the line it terminates: resolving the offset of a
/// `\n` yields the line that ends there, one column past its last visible
/// character.
///
/// # Example
///
/// ```
/// use source_text::position::locate;
///
/// let pos = locate("hello\nworld", 7);
/// assert_eq!((pos.line, pos.column), (2, 2));
/// ```
pub fn locate(content: &str, offset: usize) -> Position {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &content.as_bytes()[..offset];
    let line = memchr_iter(b'\n', before).count() + 1;
    let line_start = memrchr(b'\n', before).map_or(0, |newline| newline + 1);
    let column = content[line_start..offset].chars().count() + 1;

    Position {
        line,
        column,
        offset,
    }
}

/// Number of lines in `content`.
///
/// Empty content is one line; a trailing newline opens a final empty
/// line, so `"a\n"` counts two.
pub fn line_count(content: &str) -> usize {
    memchr_iter(b'\n', content.as_bytes()).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_zero_is_line_one_column_one() {
        assert_eq!(locate("", 0), Position::start());
        assert_eq!(locate("hello", 0), Position::start());
        assert_eq!(locate("\nhello", 0), Position::start());
    }

    #[test]
    fn test_positions_within_a_single_line() {
        let pos = locate("hello world", 6);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 7);
        assert_eq!(pos.offset, 6);
    }

    #[test]
    fn test_line_advances_after_each_newline() {
        let content = "line 1\nline 2\nline 3";

        // Start of the second line (offset 7 is 'l' in "line 2")
        let pos = locate(content, 7);
        assert_eq!((pos.line, pos.column), (2, 1));

        // Start of the third line
        let pos = locate(content, 14);
        assert_eq!((pos.line, pos.column), (3, 1));

        // End of content
        let pos = locate(content, 20);
        assert_eq!((pos.line, pos.column), (3, 7));
    }

    #[test]
    fn test_newline_belongs_to_the_line_it_terminates() {
        // Offset 6 is the '\n' ending the first line
        let pos = locate("line 1\nline 2", 6);
        assert_eq!((pos.line, pos.column), (1, 7));
    }

    #[test]
    fn test_consecutive_newlines_produce_empty_lines() {
        let content = "a\n\n\nb";

        assert_eq!((locate(content, 2).line, locate(content, 2).column), (2, 1));
        assert_eq!((locate(content, 3).line, locate(content, 3).column), (3, 1));
        assert_eq!((locate(content, 4).line, locate(content, 4).column), (4, 1));
    }

    #[test]
    fn test_out_of_range_offsets_clamp_to_the_end() {
        let content = "ab\ncd";
        let pos = locate(content, 10_000);
        assert_eq!(pos.offset, content.len());
        assert_eq!((pos.line, pos.column), (2, 3));

        assert_eq!(locate("", 5).offset, 0);
    }

    #[test]
    fn test_columns_count_code_points_not_bytes() {
        // 'é' and 'ö' are two bytes each in UTF-8
        let content = "héllo\nwörld";

        // Offset 10 is 'r': line 2 starts at byte 7, preceded by 'w' and 'ö'
        let pos = locate(content, 10);
        assert_eq!((pos.line, pos.column), (2, 3));
        assert_eq!(pos.offset, 10);
    }

    #[test]
    fn test_mid_character_offsets_snap_to_the_character_start() {
        let content = "héllo\nwörld";

        // Offset 9 lands inside 'ö' (bytes 8-9); resolution snaps to byte 8
        let pos = locate(content, 9);
        assert_eq!(pos.offset, 8);
        assert_eq!((pos.line, pos.column), (2, 2));
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let content = "a\nbc\ndef";
        for offset in 0..=content.len() {
            assert_eq!(locate(content, offset), locate(content, offset));
        }
    }

    #[test]
    fn test_line_count_cases() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("hello"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("a\n\n\nb"), 4);
    }

    #[test]
    fn test_positions_order_by_line_then_column() {
        let early = locate("ab\ncd", 1);
        let later = locate("ab\ncd", 4);
        assert!(early < later);
    }

    #[test]
    fn test_display_renders_line_colon_column() {
        let pos = locate("ab\ncd", 4);
        assert_eq!(pos.to_string(), "2:2");
    }

    #[test]
    fn test_serialization_round_trip() {
        let pos = locate("line 1\nline 2", 9);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
