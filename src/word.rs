use std::iter::FusedIterator;

pub const WORD_SEPARATOR: u8 = b' ';

/// Characters allowed after the leading capital: ASCII letters, apostrophe, hyphen.
#[inline]
fn is_trailing_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'\'' | b'-')
}

#[inline]
fn is_leading_byte(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Does `word` match `[A-Z][A-Za-z'-]+` in full?
///
/// ```
/// use person_name::word::is_word;
///
/// assert!(is_word("O'Neil"));
/// assert!(is_word("Ng"));
/// assert!(!is_word("A"));
/// assert!(!is_word("smith"));
/// ```
pub fn is_word(word: &str) -> bool {
    match word.as_bytes().split_first() {
        Some((&first, rest)) => {
            is_leading_byte(first) && !rest.is_empty() && rest.iter().all(|&b| is_trailing_byte(b))
        }
        None => false,
    }
}

/// Is `text` one or more words joined by single spaces, with nothing before
/// the first word or after the last?
pub fn is_word_sequence(text: &str) -> bool {
    // Splitting on every space means a leading, trailing or doubled space
    // produces an empty piece, which `is_word` rejects
    !text.is_empty() && text.split(WORD_SEPARATOR as char).all(is_word)
}

/// Borrowed iterator over the words of an already-validated name field.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
}

impl<'a> Words<'a> {
    #[inline]
    pub(crate) fn new(text: &'a str) -> Words<'a> {
        Words { text }
    }

    /// The words not yet yielded, as a single slice of the original field.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }

        match self.text.find(WORD_SEPARATOR as char) {
            Some(i) => {
                let word = &self.text[..i];
                self.text = &self.text[i + 1..];
                Some(word)
            }
            None => Some(std::mem::take(&mut self.text)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.text.is_empty() {
            (0, Some(0))
        } else {
            // Every word is at least two bytes, plus a separator between words
            (1, Some((self.text.len() + 1) / 3))
        }
    }
}

impl<'a> DoubleEndedIterator for Words<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }

        match self.text.rfind(WORD_SEPARATOR as char) {
            Some(i) => {
                let word = &self.text[i + 1..];
                self.text = &self.text[..i];
                Some(word)
            }
            None => Some(std::mem::take(&mut self.text)),
        }
    }
}

impl<'a> FusedIterator for Words<'a> {}
