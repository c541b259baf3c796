use thiserror::Error;

/// What went wrong while parsing, without the input attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Not exactly one comma.
    BadArity,
    /// Nothing before or nothing after the comma.
    MissingField,
    /// The family name is not a sequence of capitalized words.
    InvalidFamily,
    /// The given name is not a sequence of capitalized words, or is missing
    /// after the one permitted space, or follows a doubled space.
    InvalidGiven,
}

impl ParseErrorKind {
    /// Stable numeric code, used by the C API. Zero is reserved for success.
    pub fn code(self) -> i32 {
        match self {
            ParseErrorKind::BadArity => 1,
            ParseErrorKind::MissingField => 2,
            ParseErrorKind::InvalidFamily => 3,
            ParseErrorKind::InvalidGiven => 4,
        }
    }

    pub(crate) fn reason(self) -> &'static str {
        match self {
            ParseErrorKind::BadArity => "bad_arity",
            ParseErrorKind::MissingField => "missing_field",
            ParseErrorKind::InvalidFamily => "invalid_family",
            ParseErrorKind::InvalidGiven => "invalid_given",
        }
    }
}

/// Input text that could not be parsed as a person name.
///
/// Every variant keeps the complete original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid input syntax for type person_name: \"{input}\" (expected exactly one comma)")]
    BadArity { input: String },

    #[error("invalid input syntax for type person_name: \"{input}\" (family or given name is empty)")]
    MissingField { input: String },

    #[error("invalid input syntax for type person_name: \"{input}\" (malformed family name)")]
    InvalidFamily { input: String },

    #[error("invalid input syntax for type person_name: \"{input}\" (malformed given name)")]
    InvalidGiven { input: String },
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> ParseError {
        let input = input.to_string();
        match kind {
            ParseErrorKind::BadArity => ParseError::BadArity { input },
            ParseErrorKind::MissingField => ParseError::MissingField { input },
            ParseErrorKind::InvalidFamily => ParseError::InvalidFamily { input },
            ParseErrorKind::InvalidGiven => ParseError::InvalidGiven { input },
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::BadArity { .. } => ParseErrorKind::BadArity,
            ParseError::MissingField { .. } => ParseErrorKind::MissingField,
            ParseError::InvalidFamily { .. } => ParseErrorKind::InvalidFamily,
            ParseError::InvalidGiven { .. } => ParseErrorKind::InvalidGiven,
        }
    }

    /// The rejected input, exactly as it was given.
    pub fn input(&self) -> &str {
        match self {
            ParseError::BadArity { input }
            | ParseError::MissingField { input }
            | ParseError::InvalidFamily { input }
            | ParseError::InvalidGiven { input } => input,
        }
    }
}

/// Stored text that is not a canonical person name.
///
/// Only produced when re-admitting previously stored values; a `PersonName`
/// obtained from the parser can never be corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid person name format: \"{stored}\"")]
pub struct CorruptValue {
    stored: String,
}

impl CorruptValue {
    pub(crate) fn new(stored: &str) -> CorruptValue {
        CorruptValue {
            stored: stored.to_string(),
        }
    }

    pub fn stored(&self) -> &str {
        &self.stored
    }
}
