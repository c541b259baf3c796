use super::error::{ParseError, ParseErrorKind};
use super::field;
use compact_str::CompactString;
use log::{debug, trace};

pub const SEPARATOR: char = ',';

/// A successfully parsed name: the canonical text and the byte offset of
/// its single comma.
#[derive(Debug)]
pub struct Parsed {
    pub canonical: CompactString,
    pub separator: usize,
}

pub fn parse(input: &str) -> Result<Parsed, ParseError> {
    match run(input) {
        Ok(parsed) => {
            trace!(
                "event=parse module=parse status=ok len={}",
                parsed.canonical.len()
            );
            Ok(parsed)
        }
        Err(kind) => {
            debug!(
                "event=parse module=parse status=rejected reason={} len={}",
                kind.reason(),
                input.len()
            );
            Err(ParseError::new(kind, input))
        }
    }
}

fn run(input: &str) -> Result<Parsed, ParseErrorKind> {
    if input.bytes().filter(|&b| b == SEPARATOR as u8).count() != 1 {
        return Err(ParseErrorKind::BadArity);
    }

    let (family, given) = input
        .split_once(SEPARATOR)
        .ok_or(ParseErrorKind::BadArity)?;

    if family.is_empty() || given.is_empty() {
        return Err(ParseErrorKind::MissingField);
    }

    if !field::validate_family(family) {
        return Err(ParseErrorKind::InvalidFamily);
    }

    let given = field::strip_given_space(given).ok_or(ParseErrorKind::InvalidGiven)?;

    if !field::validate_given(given) {
        return Err(ParseErrorKind::InvalidGiven);
    }

    let mut canonical = CompactString::with_capacity(family.len() + 1 + given.len());
    canonical.push_str(family);
    canonical.push(SEPARATOR);
    canonical.push_str(given);

    Ok(Parsed {
        canonical,
        separator: family.len(),
    })
}
