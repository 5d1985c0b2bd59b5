use chrono::{DateTime, Utc};

use super::{keys, sent_at, tag_text};
use crate::error::Result;
use crate::message::TagMap;

/// A chat line sent to a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    /// The sender's `display-name`.
    pub username: String,
    /// The sender's name color, empty if they never picked one.
    pub color: String,
    pub is_moderator: bool,
    pub is_subscriber: bool,
    /// Twitch Turbo.
    pub has_premium_badge: bool,
    pub text: String,
    /// When the server accepted the message, if `tmi-sent-ts` was sent.
    pub sent_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    /// Required tags, in the order they are checked.
    pub const REQUIRED_TAGS: [&'static str; 6] = [
        keys::DISPLAY_NAME,
        keys::MOD,
        keys::ROOM_ID,
        keys::USER_ID,
        keys::SUBSCRIBER,
        keys::TURBO,
    ];

    pub(crate) fn from_tags(tags: &TagMap<'_>, text: &str, unescape: bool) -> Result<Self> {
        let username = tag_text(tags.require(keys::DISPLAY_NAME)?, unescape);
        let mod_flag = tags.require_flag(keys::MOD)?;
        let room_id = tags.require(keys::ROOM_ID)?;
        let user_id = tags.require(keys::USER_ID)?;
        let is_subscriber = tags.require_flag(keys::SUBSCRIBER)?;
        let has_premium_badge = tags.require_flag(keys::TURBO)?;
        let color = tags
            .get(keys::COLOR)
            .map(|c| tag_text(c, unescape))
            .unwrap_or_default();

        Ok(ChatMessage {
            username,
            color,
            is_moderator: is_moderator(mod_flag, room_id, user_id),
            is_subscriber,
            has_premium_badge,
            text: text.to_string(),
            sent_at: sent_at(tags),
        })
    }
}

/// Moderator status of a chat sender.
///
/// The broadcaster never gets `mod=1` in their own room, so a sender whose
/// `user-id` is the `room-id` counts as a moderator too.
pub fn is_moderator(mod_flag: bool, room_id: &str, user_id: &str) -> bool {
    mod_flag || room_id == user_id
}
