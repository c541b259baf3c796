//! A strictly validated person name, stored as `Family,Given`.
//!
//! Input must have exactly one comma separating a family name from a given
//! name. Each of those is one or more words joined by single spaces, and each
//! word is an ASCII capital followed by at least one ASCII letter, apostrophe
//! or hyphen. A single space after the comma is allowed and dropped.
//!
//! ```
//! use person_name::PersonName;
//!
//! let name = PersonName::parse("Van Der Berg, John Michael").unwrap();
//! assert_eq!("Van Der Berg,John Michael", name.as_str());
//! assert_eq!("Van Der Berg", name.family());
//! assert_eq!("John Michael", name.given());
//! assert_eq!("John Van Der Berg", name.display_name());
//!
//! assert!(PersonName::parse("Smith,  John").is_err());
//!
//! let john = PersonName::parse("Smith,John").unwrap();
//! let zack = PersonName::parse("Smith,Zack").unwrap();
//! assert!(john < zack);
//! ```

#![cfg_attr(feature = "bench", feature(test))]

#[cfg(feature = "bench")]
extern crate test;

mod comparison;
mod eq_hash;
mod error;
mod field;
pub mod lookup3;
mod parse;
pub mod word;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

use compact_str::CompactString;
use log::warn;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use error::{CorruptValue, ParseError, ParseErrorKind};
pub use parse::SEPARATOR;
pub use word::Words;

/// A validated `Family,Given` name.
///
/// The only ways to obtain one are [`PersonName::parse`] (and the
/// `FromStr`/`TryFrom` impls that call it) and
/// [`PersonName::from_canonical`], so every instance satisfies the grammar.
#[derive(Clone)]
pub struct PersonName {
    text: CompactString,
    separator: usize,
}

impl PersonName {
    /// Parse and canonicalize free text.
    ///
    /// # Examples
    /// ```
    /// use person_name::{ParseErrorKind, PersonName};
    ///
    /// let a = PersonName::parse("Smith,John").unwrap();
    /// let b = PersonName::parse("Smith, John").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!("Smith,John", b.as_str());
    ///
    /// let err = PersonName::parse("A,B,C").unwrap_err();
    /// assert_eq!(ParseErrorKind::BadArity, err.kind());
    /// assert_eq!("A,B,C", err.input());
    /// ```
    pub fn parse(input: &str) -> Result<PersonName, ParseError> {
        let parsed = parse::parse(input)?;
        Ok(PersonName {
            text: parsed.canonical,
            separator: parsed.separator,
        })
    }

    /// Re-admit text previously obtained from [`PersonName::as_str`].
    ///
    /// Unlike `parse`, this accepts only text that is already canonical; a
    /// space after the comma, or anything the parser would reject, means the
    /// stored value was damaged.
    pub fn from_canonical(stored: &str) -> Result<PersonName, CorruptValue> {
        match PersonName::parse(stored) {
            Ok(name) if name.as_str() == stored => Ok(name),
            _ => {
                warn!(
                    "event=restore module=person_name status=corrupt len={}",
                    stored.len()
                );
                Err(CorruptValue::new(stored))
            }
        }
    }

    /// The canonical stored form. Parsing it again yields an equal name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text.into_string()
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Everything before the comma.
    #[inline]
    pub fn family(&self) -> &str {
        &self.text[..self.separator]
    }

    /// Everything after the comma.
    #[inline]
    pub fn given(&self) -> &str {
        &self.text[self.separator + 1..]
    }

    #[inline]
    pub fn family_words(&self) -> Words<'_> {
        Words::new(self.family())
    }

    #[inline]
    pub fn given_words(&self) -> Words<'_> {
        Words::new(self.given())
    }

    /// The given name up to its first space.
    #[inline]
    pub fn first_given_name(&self) -> &str {
        let given = self.given();
        match given.find(' ') {
            Some(i) => &given[..i],
            None => given,
        }
    }

    /// First given name, a space, then the full family name.
    ///
    /// Only the first word of a multi-word given name is kept, while every
    /// word of the family name is. Existing stored data depends on this
    /// exact rendering.
    ///
    /// ```
    /// use person_name::PersonName;
    ///
    /// let name = PersonName::parse("Van Der Berg,John Michael").unwrap();
    /// assert_eq!("John Van Der Berg", name.display_name());
    /// ```
    pub fn display_name(&self) -> String {
        let first = self.first_given_name();
        let family = self.family();

        let mut result = String::with_capacity(first.len() + 1 + family.len());
        result.push_str(first);
        result.push(' ');
        result.push_str(family);
        result
    }

    /// 32-bit hash of the canonical bytes; equal names always agree.
    #[inline]
    pub fn hash32(&self) -> u32 {
        lookup3::hash_bytes(self.text.as_bytes())
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PersonName")
            .field("family", &self.family())
            .field("given", &self.given())
            .finish()
    }
}

impl AsRef<str> for PersonName {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PersonName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonName::parse(s)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PersonName::parse(s)
    }
}

impl TryFrom<String> for PersonName {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PersonName::parse(&s)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> String {
        name.into_string()
    }
}

/// Split stored text into family and given names without re-validating
/// the words.
///
/// For callers that hold only the stored bytes. Fails if there is not
/// exactly one comma with text on both sides, or if a space follows it.
pub fn split_canonical(stored: &str) -> Result<(&str, &str), CorruptValue> {
    match stored.split_once(SEPARATOR) {
        Some((family, given))
            if !family.is_empty()
                && !given.is_empty()
                && !given.starts_with(' ')
                && !given.contains(SEPARATOR) =>
        {
            Ok((family, given))
        }
        _ => Err(CorruptValue::new(stored)),
    }
}

pub fn parse(input: &str) -> Result<PersonName, ParseError> {
    PersonName::parse(input)
}

/// Inverse of [`parse`]: the canonical text, unchanged.
pub fn format(name: &PersonName) -> &str {
    name.as_str()
}

pub fn compare(a: &PersonName, b: &PersonName) -> Ordering {
    a.cmp(b)
}

pub fn equals(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) == Ordering::Equal
}

pub fn not_equals(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) != Ordering::Equal
}

pub fn lt(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) == Ordering::Less
}

pub fn lte(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) != Ordering::Greater
}

pub fn gt(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) == Ordering::Greater
}

pub fn gte(a: &PersonName, b: &PersonName) -> bool {
    compare(a, b) != Ordering::Less
}

pub fn hash(name: &PersonName) -> u32 {
    name.hash32()
}

pub fn family(name: &PersonName) -> &str {
    name.family()
}

pub fn given(name: &PersonName) -> &str {
    name.given()
}

pub fn display(name: &PersonName) -> String {
    name.display_name()
}
