//! Length clipping for free-text fields.

/// Marker appended to text that was truncated.
pub const TRUNCATION_MARKER: char = '…';

/// Clips `input` to at most `max_chars` characters.
///
/// Length is counted in Unicode scalar values, never splitting a character.
/// Text over the bound is cut to exactly `max_chars` characters followed by
/// [`TRUNCATION_MARKER`]. Text at or under the bound is returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clip("abcdef", 3), "abc…");
/// assert_eq!(clip("abc", 3), "abc");
/// ```
pub fn clip(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len_utf8());
            out.push_str(&input[..cut]);
            out.push(TRUNCATION_MARKER);
            out
        }
        None => input.to_string(),
    }
}
