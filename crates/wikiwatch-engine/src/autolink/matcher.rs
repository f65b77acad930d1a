/// Compares two chars ignoring case, using full Unicode lower-casing.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Tries to match `needle` at byte offset `start` of `haystack`, ignoring case.
///
/// Returns the byte offset just past the matched text. Matching is char by
/// char, so the matched slice may differ in byte length from `needle`.
pub fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut hay = haystack[start..].char_indices();
    let mut end = start;
    for n in needle.chars() {
        let (offset, h) = hay.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
        end = start + offset + h.len_utf8();
    }
    Some(end)
}

/// Finds the first case-insensitive occurrence of `needle` at or after byte
/// offset `from`. Returns its byte range.
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .char_indices()
        .map(|(i, _)| from + i)
        .find_map(|start| match_at(haystack, start, needle).map(|end| (start, end)))
}

/// True if no alphanumeric char sits immediately before `pos`.
pub fn is_boundary_before(text: &str, pos: usize) -> bool {
    !text[..pos]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

/// True if no alphanumeric char sits at `pos`.
pub fn is_boundary_after(text: &str, pos: usize) -> bool {
    !text[pos..].chars().next().is_some_and(char::is_alphanumeric)
}

/// Byte offset of the char following the one at `pos`.
pub fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}
