//! Delimiter searches over raw bytes.
//!
//! All searches work on `&[u8]` so an offset that is not a char boundary can
//! never cause a slicing panic. Each search is a single linear pass.

/// Start offset of the first occurrence of `delim` lying wholly inside `[from, len)`.
pub fn first_from(text: &[u8], delim: &[u8], from: usize) -> Option<usize> {
    if delim.is_empty() {
        return None;
    }
    let from = from.min(text.len());
    text[from..]
        .windows(delim.len())
        .position(|w| w == delim)
        .map(|i| i + from)
}

/// Start offsets of the non-overlapping occurrences of `delim`, left to right.
///
/// `***` holds one occurrence of `**` (at 0), `****` holds two.
pub fn occurrences<'a>(text: &'a [u8], delim: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let start = first_from(text, delim, from)?;
        from = start + delim.len();
        Some(start)
    })
}

/// Occurrences of `delim` paired up as `(open_start, close_start)`.
///
/// Odd occurrences open and even ones close; a trailing unmatched opener is
/// dropped.
pub fn pairs<'a>(text: &'a [u8], delim: &'a [u8]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut found = occurrences(text, delim);
    std::iter::from_fn(move || Some((found.next()?, found.next()?)))
}
