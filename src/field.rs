use super::word::{is_word_sequence, WORD_SEPARATOR};

/// A family name field allows no leading space at all.
#[inline]
pub fn validate_family(text: &str) -> bool {
    is_word_sequence(text)
}

/// Check a given name field after `strip_given_space` has run.
#[inline]
pub fn validate_given(text: &str) -> bool {
    is_word_sequence(text)
}

/// Consume at most one space following the separator.
///
/// Returns `None` if what remains is empty or still starts with a space,
/// which rejects both a missing given name and a doubled space after the
/// comma.
pub fn strip_given_space(text: &str) -> Option<&str> {
    let remainder = text
        .strip_prefix(WORD_SEPARATOR as char)
        .unwrap_or(text);

    match remainder.as_bytes().first() {
        None => None,
        Some(&WORD_SEPARATOR) => None,
        Some(_) => Some(remainder),
    }
}
