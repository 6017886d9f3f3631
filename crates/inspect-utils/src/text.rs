//! Character-based text windows.

/// Longest prefix of `s` holding at most `max_chars` characters.
///
/// Always cuts on a character boundary, so multi-byte text is never split.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
