//! Raw line to typed event.
//!
//! Decoding is a single stateless pass: split the line, parse the tag
//! segment, then read the keys the requested event needs. The [`TagMap`]
//! borrows from the line and is dropped once the event is built.

use crate::config::DecoderConfig;
use crate::error::Result;
use crate::event::{ChatMessage, EventKind, Resub, TwitchEvent};
use crate::message::{parse_tags, split_line, TagMap};

/// Decoder bound to one [`DecoderConfig`].
///
/// ```
/// use twitch_tags::{Decoder, DecoderConfig};
///
/// let decoder = Decoder::new(DecoderConfig::tmi());
/// let raw = "@display-name=Ash;color=;mod=0;subscriber=0;turbo=0;room-id=9;user-id=9 \
///            :ash!ash@ash.tmi.twitch.tv PRIVMSG #ash :time: 12:00";
/// let msg = decoder.decode_chat(raw).unwrap();
/// assert!(msg.is_moderator);
/// assert_eq!(msg.text, "time: 12:00");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `raw` as the given kind of event.
    pub fn decode(&self, raw: &str, kind: EventKind) -> Result<TwitchEvent> {
        match kind {
            EventKind::ChatMessage => self.decode_chat(raw).map(TwitchEvent::Chat),
            EventKind::Resub => self.decode_resub(raw).map(TwitchEvent::Resub),
        }
    }

    pub fn decode_chat(&self, raw: &str) -> Result<ChatMessage> {
        let (tags, text) = self.split(raw)?;
        let msg = ChatMessage::from_tags(&tags, text, self.config.unescape_values)?;
        trace_decoded(EventKind::ChatMessage, &tags);
        Ok(msg)
    }

    pub fn decode_resub(&self, raw: &str) -> Result<Resub> {
        let (tags, text) = self.split(raw)?;
        let resub = Resub::from_tags(&tags, text, self.config.unescape_values)?;
        trace_decoded(EventKind::Resub, &tags);
        Ok(resub)
    }

    fn split<'a>(&self, raw: &'a str) -> Result<(TagMap<'a>, &'a str)> {
        let (segment, payload) = split_line(raw, self.config.framing)?;
        let tags = parse_tags(self.config.marker.apply(segment))?;
        Ok((tags, payload))
    }
}

#[cfg(feature = "tracing")]
fn trace_decoded(kind: EventKind, tags: &TagMap<'_>) {
    tracing::trace!(kind = %kind, tags = tags.len(), "decoded tagged line");
}

#[cfg(not(feature = "tracing"))]
fn trace_decoded(_kind: EventKind, _tags: &TagMap<'_>) {}

/// Decode `raw` as `kind` using [`DecoderConfig::default`].
///
/// ```
/// use twitch_tags::{decode, EventKind, TwitchEvent};
///
/// let raw = "display-name=Ash;msg-param-months=3 :three months :)";
/// match decode(raw, EventKind::Resub).unwrap() {
///     TwitchEvent::Resub(resub) => {
///         assert_eq!(resub.months_subscribed, 3);
///         assert_eq!(resub.text, "three months :)");
///     }
///     other => panic!("unexpected event: {:?}", other),
/// }
/// ```
pub fn decode(raw: &str, kind: EventKind) -> Result<TwitchEvent> {
    Decoder::default().decode(raw, kind)
}

/// Decode `raw` as a [`ChatMessage`] using [`DecoderConfig::default`].
pub fn decode_chat(raw: &str) -> Result<ChatMessage> {
    Decoder::default().decode_chat(raw)
}

/// Decode `raw` as a [`Resub`] using [`DecoderConfig::default`].
pub fn decode_resub(raw: &str) -> Result<Resub> {
    Decoder::default().decode_resub(raw)
}
