//! Functionality for looking up the line containing a source position.
use crate::span::{Bytes, Line, Span};

/// Finds the line containing `target_position`. A position at the very end
/// of the source belongs to the last line. Returns [`None`] if the position
/// lies beyond the end of the source.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext<'_>> {
    let target: usize = target_position.into();
    if target > source.len() {
        return None;
    }

    let lines = inclusive_split_lines(source);
    let last_idx = lines.len() - 1;

    let mut position = 0usize;
    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        let is_last = line_idx == last_idx;
        if target < end_position || (is_last && target == end_position) {
            return Some(LineContext {
                source: line,
                range: Span::new(Bytes::new(position), Bytes::new(end_position)),
                line_no: Line(line_idx + 1),
            });
        }
        position = end_position;
    }

    None
}

/// Splits on line feeds, keeping them, so that line numbers agree with the
/// scanner's line counter. A trailing line feed starts an empty last line.
fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = source.split_inclusive('\n').collect();
    if source.is_empty() || source.ends_with('\n') {
        lines.push("");
    }
    lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: Line,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> Line {
        self.line_no
    }

    /// Number of characters between the start of the line and `position`.
    pub fn column_of(&self, position: Bytes) -> usize {
        let offset = usize::from(position) - usize::from(self.range.start());
        self.source
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn find_line_first_character_of_empty_source() {
        let context = find_line("", Bytes::new(0)).expect("line");

        assert_eq!(context.line_no, Line(1));
        assert_eq!(context.range, Span::zero());
        assert_eq!(context.source, "");
    }

    #[test]
    pub fn find_line_first_character_of_single_line() {
        let context = find_line("abc", Bytes::new(0)).expect("line");

        assert_eq!(context.line_no, Line(1));
        assert_eq!(context.range, Span::new(Bytes::new(0), Bytes::new(3)));
        assert_eq!(context.source, "abc");
    }

    #[test]
    pub fn find_line_first_character_of_next_line() {
        let context = find_line("abc\ndef", Bytes::new(5)).expect("line");

        assert_eq!(context.line_no, Line(2));
        assert_eq!(context.range, Span::new(Bytes::new(4), Bytes::new(7)));
        assert_eq!(context.source, "def");
    }

    #[test]
    pub fn find_line_at_end_of_source() {
        let context = find_line("abc\ndef", Bytes::new(7)).expect("line");
        assert_eq!(context.line_no, Line(2));

        let context = find_line("abc\n", Bytes::new(4)).expect("line");
        assert_eq!(context.line_no, Line(2));
        assert_eq!(context.source, "");
    }

    #[test]
    pub fn find_line_outside_source() {
        assert!(find_line("abc", Bytes::new(4)).is_none());
    }

    #[test]
    pub fn for_display_strips_line_endings() {
        let context = find_line("abc\r\ndef", Bytes::new(1)).expect("line");

        assert_eq!(context.for_display(), "abc");
    }

    #[test]
    pub fn column_counts_characters() {
        let context = find_line("x\nλ = @", Bytes::new(7)).expect("line");

        assert_eq!(context.column_of(Bytes::new(7)), 4);
    }

    #[test]
    pub fn inclusive_split_lines_empty_string() {
        assert_eq!(inclusive_split_lines(""), vec![""])
    }

    #[test]
    pub fn inclusive_split_lines_no_line_ending() {
        assert_eq!(vec!["abcdef"], inclusive_split_lines("abcdef"))
    }

    #[test]
    pub fn inclusive_split_lines_crlf_stays_on_one_line() {
        assert_eq!(vec!["abc\r\n", "def"], inclusive_split_lines("abc\r\ndef"))
    }

    #[test]
    pub fn inclusive_split_lines_trailing_newline() {
        assert_eq!(vec!["a\n", "\n", ""], inclusive_split_lines("a\n\n"))
    }
}
