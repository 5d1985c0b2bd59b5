//! Typed events built from a line's tags and payload.

mod chat;
mod resub;

pub use self::chat::{is_moderator, ChatMessage};
pub use self::resub::Resub;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};

use crate::message::unescape_tag_value;
use crate::message::TagMap;

/// Tag keys read by the event constructors.
pub mod keys {
    pub const DISPLAY_NAME: &str = "display-name";
    pub const COLOR: &str = "color";
    pub const MOD: &str = "mod";
    pub const ROOM_ID: &str = "room-id";
    pub const USER_ID: &str = "user-id";
    pub const SUBSCRIBER: &str = "subscriber";
    pub const TURBO: &str = "turbo";
    pub const MONTHS: &str = "msg-param-months";
    pub const SENT_TS: &str = "tmi-sent-ts";
}

/// Which event a line should be decoded as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    ChatMessage,
    Resub,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::ChatMessage => "chat",
            EventKind::Resub => "resub",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an event kind name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(EventKind::ChatMessage),
            "resub" => Ok(EventKind::Resub),
            other => Err(UnknownEventKind(other.to_string())),
        }
    }
}

/// A decoded line of either kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwitchEvent {
    Chat(ChatMessage),
    Resub(Resub),
}

impl TwitchEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TwitchEvent::Chat(_) => EventKind::ChatMessage,
            TwitchEvent::Resub(_) => EventKind::Resub,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            TwitchEvent::Chat(msg) => &msg.username,
            TwitchEvent::Resub(resub) => &resub.username,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TwitchEvent::Chat(msg) => &msg.text,
            TwitchEvent::Resub(resub) => &resub.text,
        }
    }
}

impl From<ChatMessage> for TwitchEvent {
    fn from(msg: ChatMessage) -> Self {
        TwitchEvent::Chat(msg)
    }
}

impl From<Resub> for TwitchEvent {
    fn from(resub: Resub) -> Self {
        TwitchEvent::Resub(resub)
    }
}

fn tag_text(raw: &str, unescape: bool) -> String {
    if unescape {
        unescape_tag_value(raw)
    } else {
        raw.to_string()
    }
}

/// `tmi-sent-ts` is milliseconds since the Unix epoch. It is optional, so a
/// bad value is treated the same as an absent one.
fn sent_at(tags: &TagMap<'_>) -> Option<DateTime<Utc>> {
    let millis = tags.get(keys::SENT_TS)?.parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}
