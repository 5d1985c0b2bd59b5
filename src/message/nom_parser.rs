//! Nom-based line splitter.
//!
//! Separates the tag segment of a line from its payload. Only the first
//! ` :` of the line is a boundary; the payload is returned as a slice of
//! the input and is never split again.

use nom::{
    bytes::complete::{tag, take_until},
    combinator::rest,
    error::{context, VerboseError},
    sequence::separated_pair,
    IResult,
};

use crate::config::Framing;
use crate::error::{DecodeError, Result};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Separator between the tag segment (or envelope) and what follows it.
pub const PAYLOAD_DELIMITER: &str = " :";

/// Text up to, not including, the next ` :`.
fn until_delimiter(input: &str) -> ParseResult<&str, &str> {
    context("reading up to payload delimiter", take_until(PAYLOAD_DELIMITER))(input)
}

/// `<head> :<tail>` where `<tail>` is the whole remaining input.
fn delimited_pair(input: &str) -> ParseResult<&str, (&str, &str)> {
    separated_pair(until_delimiter, tag(PAYLOAD_DELIMITER), rest)(input)
}

/// Split a line into its tag segment and its payload.
///
/// ```text
/// TagsThenPayload:  <tags> :<payload>
/// IrcEnvelope:      <tags> :<prefix> <COMMAND> <#channel>[ :<payload>]
/// ```
pub(crate) fn split_line(line: &str, framing: Framing) -> Result<(&str, &str)> {
    let (_, (tags, remainder)) =
        delimited_pair(line).map_err(|_| DecodeError::MissingPayloadDelimiter)?;

    let payload = match framing {
        Framing::TagsThenPayload => remainder,
        Framing::IrcEnvelope => match delimited_pair(remainder) {
            Ok((_, (_envelope, payload))) => payload,
            Err(_) => "",
        },
    };

    Ok((tags, payload))
}
