//! Error types for tagged line decoding.
//!
//! Every failure is returned to the caller; nothing here is logged or
//! replaced with a default value.

use std::num::ParseIntError;

use thiserror::Error;

/// Convenience type alias for Results using [`DecodeError`].
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Errors encountered when decoding a tagged line into an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A `;`-delimited fragment of the tag segment has no `=`, or has an
    /// empty key.
    #[error("malformed tag fragment: {fragment:?}")]
    MalformedTagFragment {
        /// The offending fragment, verbatim.
        fragment: String,
    },

    /// A tag the requested event needs is absent.
    #[error("missing required tag: {key}")]
    MissingRequiredTag {
        /// The absent key.
        key: &'static str,
    },

    /// A numeric tag could not be parsed as a non-negative integer.
    #[error("invalid numeric tag {key}: {value:?}")]
    InvalidNumericTag {
        /// The tag key.
        key: &'static str,
        /// The raw value found on the line.
        value: String,
        /// The underlying integer parse error.
        #[source]
        cause: ParseIntError,
    },

    /// The line has no ` :` separating tags from the payload.
    #[error("missing payload delimiter")]
    MissingPayloadDelimiter,
}

impl DecodeError {
    /// The tag key this error refers to, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingRequiredTag { key } | DecodeError::InvalidNumericTag { key, .. } => {
                Some(*key)
            }
            _ => None,
        }
    }
}
