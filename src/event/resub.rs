use chrono::{DateTime, Utc};

use super::{keys, sent_at, tag_text};
use crate::error::{DecodeError, Result};
use crate::message::TagMap;

/// A resubscription notice, with the user's optional message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resub {
    pub username: String,
    pub months_subscribed: u32,
    /// The message shared with the resub, empty if there was none.
    pub text: String,
    pub sent_at: Option<DateTime<Utc>>,
}

impl Resub {
    pub const REQUIRED_TAGS: [&'static str; 2] = [keys::DISPLAY_NAME, keys::MONTHS];

    pub(crate) fn from_tags(tags: &TagMap<'_>, text: &str, unescape: bool) -> Result<Self> {
        let username = tag_text(tags.require(keys::DISPLAY_NAME)?, unescape);
        let months = tags.require(keys::MONTHS)?;
        let months_subscribed =
            months
                .parse::<u32>()
                .map_err(|cause| DecodeError::InvalidNumericTag {
                    key: keys::MONTHS,
                    value: months.to_string(),
                    cause,
                })?;

        Ok(Resub {
            username,
            months_subscribed,
            text: text.to_string(),
            sent_at: sent_at(tags),
        })
    }
}
