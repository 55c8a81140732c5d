//! Offset helpers over UTF-8 text used for cursor motion and clamping.

/// Largest char boundary `<= offset`, clamped to the text length.
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Boundary of the character before `offset`, or 0 at the start.
pub fn prev_char_boundary(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[..offset]
        .chars()
        .next_back()
        .map_or(0, |c| offset - c.len_utf8())
}

/// Boundary of the character after `offset`, or the text length at the end.
pub fn next_char_boundary(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[offset..]
        .chars()
        .next()
        .map_or(text.len(), |c| offset + c.len_utf8())
}

/// Offset of the first byte of the line containing `offset`.
pub fn line_start(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Offset of the line terminator (or text end) of the line containing `offset`.
pub fn line_end(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[offset..].find('\n').map_or(text.len(), |i| offset + i)
}

/// Converts a byte offset to a `(row, column)` pair, column counted in chars.
pub fn offset_to_point(text: &str, offset: usize) -> (usize, usize) {
    let offset = floor_char_boundary(text, offset);
    let row = text[..offset].matches('\n').count();
    let col = text[line_start(text, offset)..offset].chars().count();
    (row, col)
}

/// Converts a `(row, column)` pair back to a byte offset.
///
/// Rows past the last line land on the text end; columns past the line end
/// land on the line end.
pub fn point_to_offset(text: &str, row: usize, col: usize) -> usize {
    let mut start = 0;
    for _ in 0..row {
        match text[start..].find('\n') {
            Some(i) => start += i + 1,
            None => return text.len(),
        }
    }
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn floor_char_boundary_steps_back_inside_chars() {
        let text = "héllo";
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
        assert_eq!(floor_char_boundary(text, 99), text.len());
    }

    #[test]
    fn char_steps_respect_multibyte() {
        let text = "a世b";
        assert_eq!(next_char_boundary(text, 1), 4);
        assert_eq!(prev_char_boundary(text, 4), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }

    #[test]
    fn line_bounds() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_start(text, 5), 4);
        assert_eq!(line_end(text, 5), 7);
        assert_eq!(line_start(text, 2), 0);
        assert_eq!(line_end(text, 10), text.len());
    }

    #[rstest]
    #[case(0, (0, 0))]
    #[case(3, (0, 3))]
    #[case(4, (1, 0))]
    #[case(6, (1, 2))]
    #[case(13, (2, 5))]
    fn offset_to_point_cases(#[case] offset: usize, #[case] point: (usize, usize)) {
        assert_eq!(offset_to_point("one\ntwo\nthree", offset), point);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 2, 6)]
    #[case(1, 99, 7)]
    #[case(2, 1, 9)]
    #[case(7, 0, 13)]
    fn point_to_offset_cases(#[case] row: usize, #[case] col: usize, #[case] offset: usize) {
        assert_eq!(point_to_offset("one\ntwo\nthree", row, col), offset);
    }

    #[test]
    fn point_round_trips_with_multibyte_columns() {
        let text = "ab\n世界x";
        let offset = point_to_offset(text, 1, 2);
        assert_eq!(&text[offset..], "x");
        assert_eq!(offset_to_point(text, offset), (1, 2));
    }

    #[test]
    fn trailing_newline_has_empty_last_line() {
        let text = "one\n";
        assert_eq!(point_to_offset(text, 1, 0), 4);
        assert_eq!(offset_to_point(text, 4), (1, 0));
    }
}
